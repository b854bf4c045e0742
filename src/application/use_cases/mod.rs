// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 用例模块
///
/// - 截图抓取（scrape_use_case）
/// - 上传编码（upload_use_case）
pub mod scrape_use_case;
pub mod upload_use_case;
