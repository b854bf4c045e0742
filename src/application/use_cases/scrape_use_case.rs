// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::sync::Arc;
use thiserror::Error;
use tracing::info;

use crate::{
    application::dto::scrape_request::ScrapeRequestDto,
    config::settings::ScraperSettings,
    domain::{
        models::screenshot::ScrapeResult,
        services::{
            data_uri::{encode_data_uri, SCRAPED_IMAGE_MIME},
            image_downloader::ImageDownloader,
            listing_service::ListingService,
            package_extractor::extract_package_id,
            screenshot_extractor::ScreenshotExtractor,
        },
    },
    engines::traits::{EngineError, HttpFetcher},
};

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("Missing url in body")]
    MissingUrl,
    #[error("Invalid Play Store URL (no id param)")]
    InvalidListingUrl,
    #[error("{0}")]
    Fetch(#[from] EngineError),
}

/// 截图抓取用例
///
/// 串联包名解析、详情页抓取、截图地址提取、下载与编码
pub struct ScrapeUseCase {
    listing: ListingService,
    extractor: ScreenshotExtractor,
    downloader: ImageDownloader,
    max_screenshots: usize,
}

impl ScrapeUseCase {
    pub fn new(
        fetcher: Arc<dyn HttpFetcher>,
        settings: &ScraperSettings,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            listing: ListingService::new(fetcher.clone(), settings),
            extractor: ScreenshotExtractor::new(&settings.cdn_base_url)?,
            downloader: ImageDownloader::new(fetcher, settings.max_concurrent_downloads),
            max_screenshots: settings.max_screenshots,
        })
    }

    pub async fn execute(&self, dto: ScrapeRequestDto) -> Result<ScrapeResult, ScrapeError> {
        let url = dto
            .url
            .filter(|url| !url.is_empty())
            .ok_or(ScrapeError::MissingUrl)?;

        let package = extract_package_id(&url).ok_or(ScrapeError::InvalidListingUrl)?;

        let html = self.listing.fetch(&package).await?;
        let candidates = self.extractor.extract(&html, self.max_screenshots);
        let images = self.downloader.download_all(&candidates).await;

        let screenshots = images
            .iter()
            .map(|image| encode_data_uri(SCRAPED_IMAGE_MIME, &image.bytes))
            .collect::<Vec<_>>();

        info!(
            "Scraped {} screenshots for {} ({} candidates)",
            screenshots.len(),
            package,
            candidates.len()
        );

        Ok(ScrapeResult {
            package,
            screenshots,
        })
    }
}

#[cfg(test)]
#[path = "scrape_use_case_test.rs"]
mod tests;
