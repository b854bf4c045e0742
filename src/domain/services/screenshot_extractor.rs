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

use regex::Regex;
use std::collections::HashSet;
use tracing::debug;

/// 默认的截图 CDN 前缀
pub const DEFAULT_CDN_BASE: &str = "https://play-lh.googleusercontent.com/";

const ICON_MARKER: &str = "icon";

/// 截图地址提取器
///
/// 从详情页 HTML 中找出截图 CDN 地址。主规则只匹配以 `=w<宽>-h<高>` 结尾的地址，
/// 主规则没有结果时退回到宽松规则。两条规则都是纯函数，不依赖网络。
#[derive(Debug, Clone)]
pub struct ScreenshotExtractor {
    primary: Regex,
    fallback: Regex,
}

impl ScreenshotExtractor {
    /// 以指定的 CDN 前缀创建提取器
    ///
    /// # 参数
    ///
    /// * `cdn_base` - CDN 地址前缀，例如 `https://play-lh.googleusercontent.com/`
    pub fn new(cdn_base: &str) -> Result<Self, regex::Error> {
        let base = regex::escape(cdn_base);
        Ok(Self {
            primary: Regex::new(&format!(r#"{}[^\s"']+?=w\d+-h\d+"#, base))?,
            fallback: Regex::new(&format!(r#"{}[^\s"']+"#, base))?,
        })
    }

    /// 主规则：带尺寸后缀的截图地址
    ///
    /// 去重后保持首次出现顺序，排除图标，并且只保留带 `=w` 或 `=s` 缩放标记的地址
    pub fn primary_candidates(&self, html: &str) -> Vec<String> {
        dedup_in_order(self.primary.find_iter(html).map(|m| m.as_str()))
            .into_iter()
            .filter(|url| !is_icon(url) && (url.contains("=w") || url.contains("=s")))
            .collect()
    }

    /// 宽松规则：同一 CDN 下同时带宽度与高度标记的任意地址
    pub fn fallback_candidates(&self, html: &str) -> Vec<String> {
        dedup_in_order(
            self.fallback
                .find_iter(html)
                .map(|m| m.as_str())
                .filter(|url| url.contains('w') && url.contains("-h") && !is_icon(url)),
        )
    }

    /// 提取截图地址，最多返回 `max` 个
    ///
    /// 两条规则都没有结果时返回空列表
    pub fn extract(&self, html: &str, max: usize) -> Vec<String> {
        let mut candidates = self.primary_candidates(html);
        if candidates.is_empty() {
            candidates = self.fallback_candidates(html);
            debug!("Primary pattern found nothing, fallback found {}", candidates.len());
        } else {
            debug!("Primary pattern found {} candidates", candidates.len());
        }

        candidates.truncate(max);
        candidates
    }
}

fn is_icon(url: &str) -> bool {
    url.contains(ICON_MARKER)
}

fn dedup_in_order<'a>(urls: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    urls.filter(|url| seen.insert(*url))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
#[path = "screenshot_extractor_test.rs"]
mod tests;
