// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

/// 抓取到的截图统一使用的 MIME 类型
pub const SCRAPED_IMAGE_MIME: &str = "image/png";

/// 上传文件未声明类型时使用的 MIME 类型
pub const FALLBACK_MIME: &str = "application/octet-stream";

/// 将字节编码为 `data:<mime>;base64,<payload>` 形式的字符串
///
/// 空输入得到负载为空的合法 data URI
pub fn encode_data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, BASE64.encode(bytes))
}
