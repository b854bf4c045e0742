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

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// 引擎错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    /// 请求失败
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    /// 上游返回非成功状态码
    #[error("Request failed with status code {0}")]
    HttpStatus(u16),
    /// 超时
    #[error("Request timed out: {0}")]
    Timeout(String),
    /// 其他错误
    #[error("Other error: {0}")]
    Other(String),
}

impl EngineError {
    /// 将 reqwest 错误归类，超时单独标出
    pub fn from_reqwest(url: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            EngineError::Timeout(url.to_string())
        } else if let Some(status) = err.status() {
            EngineError::HttpStatus(status.as_u16())
        } else {
            EngineError::RequestFailed(err)
        }
    }
}

/// HTTP 抓取特质
///
/// 详情页抓取与图片下载都通过它发出请求，测试中可替换为内存实现
#[async_trait]
pub trait HttpFetcher: Send + Sync {
    /// 以文本形式获取页面
    async fn fetch_text(&self, url: &str) -> Result<String, EngineError>;

    /// 以二进制形式获取资源
    async fn fetch_bytes(&self, url: &str) -> Result<Bytes, EngineError>;

    /// 引擎名称
    fn name(&self) -> &'static str;
}
