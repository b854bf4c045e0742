// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use bytes::Bytes;
use serde::Serialize;

use super::package::PackageId;

/// 截图抓取结果
///
/// 包含解析出的包名和按候选顺序排列的 data URI 列表，
/// 列表长度不超过配置的最大截图数
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScrapeResult {
    /// 应用包名
    pub package: PackageId,
    /// 截图 data URI 列表
    pub screenshots: Vec<String>,
}

/// 上传结果
///
/// 每个上传文件对应一个 data URI，顺序与上传顺序一致
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UploadResult {
    pub screenshots: Vec<String>,
}

/// 已下载的图片
#[derive(Debug, Clone)]
pub struct DownloadedImage {
    /// 来源地址
    pub url: String,
    /// 原始字节
    pub bytes: Bytes,
}

/// 上传的单个文件
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// 客户端提供的文件名
    pub file_name: Option<String>,
    /// 客户端声明的 MIME 类型
    pub content_type: Option<String>,
    /// 文件内容
    pub bytes: Bytes,
}
