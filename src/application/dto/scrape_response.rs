// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Serialize;

use crate::domain::models::screenshot::{ScrapeResult, UploadResult};

/// 截图抓取响应数据传输对象
#[derive(Debug, Serialize)]
pub struct ScrapeResponseDto {
    /// 应用包名
    pub package: String,
    /// 截图 data URI 列表
    pub screenshots: Vec<String>,
}

impl From<ScrapeResult> for ScrapeResponseDto {
    fn from(result: ScrapeResult) -> Self {
        Self {
            package: result.package.to_string(),
            screenshots: result.screenshots,
        }
    }
}

/// 上传响应数据传输对象
#[derive(Debug, Serialize)]
pub struct UploadResponseDto {
    pub screenshots: Vec<String>,
}

impl From<UploadResult> for UploadResponseDto {
    fn from(result: UploadResult) -> Self {
        Self {
            screenshots: result.screenshots,
        }
    }
}
