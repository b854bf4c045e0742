// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含的服务：
/// - 包名解析（package_extractor）：从商店链接中取出包名
/// - 详情页抓取（listing_service）：拼接详情页地址并取回 HTML
/// - 截图地址提取（screenshot_extractor）：从 HTML 中找出截图地址
/// - 图片下载（image_downloader）：并发下载截图，失败单独跳过
/// - data URI 编码（data_uri）：把字节编码为 base64 data URI
pub mod data_uri;
pub mod image_downloader;
pub mod listing_service;
pub mod package_extractor;
pub mod screenshot_extractor;
