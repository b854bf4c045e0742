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

use crate::config::settings::ScraperSettings;
use crate::engines::traits::{EngineError, HttpFetcher};
use async_trait::async_trait;
use bytes::Bytes;
use std::time::{Duration, Instant};
use tracing::debug;

/// 抓取引擎
///
/// 基于reqwest实现的HTTP引擎，所有请求共用一个客户端，
/// 带浏览器 User-Agent 与统一的超时时间
pub struct ReqwestEngine {
    client: reqwest::Client,
}

impl ReqwestEngine {
    /// 创建引擎
    ///
    /// # 参数
    ///
    /// * `user_agent` - 请求头中的 User-Agent
    /// * `timeout` - 单次请求超时时间
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, EngineError> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;

        Ok(Self { client })
    }

    /// 根据抓取配置创建引擎
    pub fn from_settings(settings: &ScraperSettings) -> Result<Self, EngineError> {
        Self::new(&settings.user_agent, settings.timeout())
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response, EngineError> {
        let start = Instant::now();
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| EngineError::from_reqwest(url, e))?;

        let status = response.status();
        debug!(
            "GET {} -> {} in {}ms",
            url,
            status.as_u16(),
            start.elapsed().as_millis()
        );

        if !status.is_success() {
            return Err(EngineError::HttpStatus(status.as_u16()));
        }

        Ok(response)
    }
}

#[async_trait]
impl HttpFetcher for ReqwestEngine {
    async fn fetch_text(&self, url: &str) -> Result<String, EngineError> {
        let response = self.get(url).await?;
        response
            .text()
            .await
            .map_err(|e| EngineError::from_reqwest(url, e))
    }

    async fn fetch_bytes(&self, url: &str) -> Result<Bytes, EngineError> {
        let response = self.get(url).await?;
        response
            .bytes()
            .await
            .map_err(|e| EngineError::from_reqwest(url, e))
    }

    fn name(&self) -> &'static str {
        "reqwest"
    }
}

#[cfg(test)]
#[path = "reqwest_engine_test.rs"]
mod tests;
