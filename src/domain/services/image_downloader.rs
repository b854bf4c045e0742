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

use futures::stream::{self, StreamExt};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::models::screenshot::DownloadedImage;
use crate::engines::traits::HttpFetcher;

/// 图片下载服务
///
/// 并发下载候选图片，单个失败只记录警告并跳过，不影响其他图片
pub struct ImageDownloader {
    fetcher: Arc<dyn HttpFetcher>,
    max_concurrent: usize,
}

impl ImageDownloader {
    /// 创建下载服务
    ///
    /// # 参数
    ///
    /// * `fetcher` - HTTP 抓取实现
    /// * `max_concurrent` - 同时进行的下载数，最小为 1
    pub fn new(fetcher: Arc<dyn HttpFetcher>, max_concurrent: usize) -> Self {
        Self {
            fetcher,
            max_concurrent: max_concurrent.max(1),
        }
    }

    /// 下载全部候选图片
    ///
    /// 返回结果按候选顺序排列，只包含下载成功的图片
    pub async fn download_all(&self, urls: &[String]) -> Vec<DownloadedImage> {
        // Each download owns its URL and fetcher handle so the stream stays `Send`.
        // `buffered` yields in input order regardless of completion order
        let fetcher = self.fetcher.clone();
        let images: Vec<DownloadedImage> = stream::iter(urls.to_vec())
            .map(move |url| download(fetcher.clone(), url))
            .buffered(self.max_concurrent)
            .filter_map(|image| async move { image })
            .collect()
            .await;

        debug!("Downloaded {}/{} images", images.len(), urls.len());
        images
    }
}

async fn download(fetcher: Arc<dyn HttpFetcher>, url: String) -> Option<DownloadedImage> {
    match fetcher.fetch_bytes(&url).await {
        Ok(bytes) => Some(DownloadedImage { url, bytes }),
        Err(e) => {
            warn!("Failed to download image {}: {}", url, e);
            None
        }
    }
}

#[cfg(test)]
#[path = "image_downloader_test.rs"]
mod tests;
