// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 编排领域服务完成每个接口的业务流程，
/// 不直接处理 HTTP 细节
pub mod dto;
pub mod use_cases;
