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

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// 单个上传文件及请求体的默认上限（10 MB）
pub const DEFAULT_BODY_LIMIT: usize = 10 * 1024 * 1024;

/// 应用程序配置设置
///
/// 包含服务器、抓取器和请求大小限制等所有配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 抓取配置
    pub scraper: ScraperSettings,
    /// 请求大小限制
    pub limits: LimitSettings,
}

/// 服务器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 抓取配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ScraperSettings {
    /// 商店详情页的基础地址
    pub listing_base_url: String,
    /// 详情页语言参数 (hl)
    pub language: String,
    /// 详情页国家参数 (gl)
    pub country: String,
    /// 截图所在 CDN 的地址前缀
    pub cdn_base_url: String,
    /// 请求使用的 User-Agent
    pub user_agent: String,
    /// 单次 HTTP 请求超时时间（秒）
    pub timeout_secs: u64,
    /// 每次请求返回的最大截图数
    pub max_screenshots: usize,
    /// 同时进行的图片下载数
    pub max_concurrent_downloads: usize,
}

impl ScraperSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ScraperSettings {
    fn default() -> Self {
        Self {
            listing_base_url: "https://play.google.com".to_string(),
            language: "en".to_string(),
            country: "US".to_string(),
            cdn_base_url: "https://play-lh.googleusercontent.com/".to_string(),
            user_agent: "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/127.0.0.0 Safari/537.36".to_string(),
            timeout_secs: 15,
            max_screenshots: 6,
            max_concurrent_downloads: 6,
        }
    }
}

/// 请求大小限制设置
#[derive(Debug, Clone, Deserialize)]
pub struct LimitSettings {
    /// 单个上传文件的最大字节数
    pub max_upload_bytes: usize,
    /// 请求体的最大字节数
    pub max_request_bytes: usize,
}

impl Default for LimitSettings {
    fn default() -> Self {
        Self {
            max_upload_bytes: DEFAULT_BODY_LIMIT,
            max_request_bytes: DEFAULT_BODY_LIMIT,
        }
    }
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次叠加默认值、配置文件、`PLAYSHOTS__*` 环境变量，
    /// 最后由 `PORT` 环境变量覆盖监听端口
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let scraper = ScraperSettings::default();
        let limits = LimitSettings::default();

        let builder = Config::builder()
            // Start with default settings
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            // Default scraper settings
            .set_default("scraper.listing_base_url", scraper.listing_base_url)?
            .set_default("scraper.language", scraper.language)?
            .set_default("scraper.country", scraper.country)?
            .set_default("scraper.cdn_base_url", scraper.cdn_base_url)?
            .set_default("scraper.user_agent", scraper.user_agent)?
            .set_default("scraper.timeout_secs", scraper.timeout_secs)?
            .set_default("scraper.max_screenshots", scraper.max_screenshots as u64)?
            .set_default(
                "scraper.max_concurrent_downloads",
                scraper.max_concurrent_downloads as u64,
            )?
            // Default body limits
            .set_default("limits.max_upload_bytes", limits.max_upload_bytes as u64)?
            .set_default("limits.max_request_bytes", limits.max_request_bytes as u64)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("PLAYSHOTS")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.port", std::env::var("PORT").ok())?;

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
