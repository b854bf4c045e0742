// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use url::Url;

use crate::domain::models::package::PackageId;

/// 商店 URI 前缀，例如 `market://details?id=com.example`
pub const MARKET_DETAILS_PREFIX: &str = "market://details?id=";

const ID_PARAM: &str = "id";
const ID_MARKER: &str = "id=";

/// 从商店链接中解析包名
///
/// 先按标准 URL 解析并读取 `id` 查询参数；
/// 解析失败时再尝试 `market://details?id=` 形式的链接。
///
/// # 参数
///
/// * `input` - 商店链接
///
/// # 返回值
///
/// * `Some(PackageId)` - 成功解析出非空包名
/// * `None` - 链接中没有可用的包名
pub fn extract_package_id(input: &str) -> Option<PackageId> {
    match Url::parse(input) {
        Ok(url) => url
            .query_pairs()
            .find(|(key, _)| key == ID_PARAM)
            .and_then(|(_, value)| PackageId::new(value.into_owned())),
        Err(_) => from_market_uri(input),
    }
}

/// 按固定标记截取 `market://` 链接中的包名
fn from_market_uri(input: &str) -> Option<PackageId> {
    if !input.starts_with(MARKET_DETAILS_PREFIX) {
        return None;
    }
    input.split(ID_MARKER).nth(1).and_then(PackageId::new)
}

#[cfg(test)]
#[path = "package_extractor_test.rs"]
mod tests;
