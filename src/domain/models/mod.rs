// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 应用包名（package）：商店中应用的唯一标识
/// - 截图结果（screenshot）：抓取与上传接口返回的截图集合
///
/// 所有实体都只存在于单次请求内，不做持久化。
pub mod package;
pub mod screenshot;
