// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含截图抓取与上传编码两个用例
pub mod application;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含核心业务实体和服务
pub mod domain;

/// 引擎模块
///
/// 基于 reqwest 的 HTTP 抓取实现
pub mod engines;

/// 表示层模块
///
/// 处理HTTP请求和响应，包括路由、处理器和提取器
pub mod presentation;

/// 工具模块
///
/// 提供日志初始化等通用功能
pub mod utils;
