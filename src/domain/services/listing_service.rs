// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use tracing::info;

use crate::config::settings::ScraperSettings;
use crate::domain::models::package::PackageId;
use crate::engines::traits::{EngineError, HttpFetcher};

/// 详情页抓取服务
///
/// 按模板拼出商店详情页地址并取回 HTML
pub struct ListingService {
    fetcher: Arc<dyn HttpFetcher>,
    base_url: String,
    language: String,
    country: String,
}

impl ListingService {
    pub fn new(fetcher: Arc<dyn HttpFetcher>, settings: &ScraperSettings) -> Self {
        Self {
            fetcher,
            base_url: settings.listing_base_url.trim_end_matches('/').to_string(),
            language: settings.language.clone(),
            country: settings.country.clone(),
        }
    }

    /// 详情页地址，包名按原样代入
    pub fn listing_url(&self, package: &PackageId) -> String {
        format!(
            "{}/store/apps/details?id={}&hl={}&gl={}",
            self.base_url, package, self.language, self.country
        )
    }

    /// 获取详情页 HTML
    ///
    /// # 返回值
    ///
    /// * `Ok(String)` - 页面内容
    /// * `Err(EngineError)` - 网络错误、超时或非成功状态码
    pub async fn fetch(&self, package: &PackageId) -> Result<String, EngineError> {
        let url = self.listing_url(package);
        info!("Fetching listing page {} via {}", url, self.fetcher.name());
        self.fetcher.fetch_text(&url).await
    }
}
