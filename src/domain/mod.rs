// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：包名、截图结果等请求级实体
/// - 服务（services）：包名解析、截图提取、下载与编码
///
/// 领域层只通过 `HttpFetcher` 特质访问网络，
/// 可以脱离真实 HTTP 单独测试。
pub mod models;
pub mod services;
