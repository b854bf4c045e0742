// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::use_cases::{scrape_use_case::ScrapeUseCase, upload_use_case::UploadUseCase};
use crate::presentation::handlers::{scrape_handler, upload_handler};
use axum::{
    extract::{DefaultBodyLimit, Extension},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// 创建应用路由
///
/// # 参数
///
/// * `scrape` - 截图抓取用例
/// * `upload` - 上传编码用例
/// * `max_request_bytes` - 请求体大小上限
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes(
    scrape: Arc<ScrapeUseCase>,
    upload: Arc<UploadUseCase>,
    max_request_bytes: usize,
) -> Router {
    let public_routes = Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/version", get(version));

    let api_routes = Router::new()
        .route("/scrape", post(scrape_handler::scrape))
        .route("/upload-screens", post(upload_handler::upload_screens))
        .layer(DefaultBodyLimit::max(max_request_bytes))
        .layer(Extension(scrape))
        .layer(Extension(upload));

    Router::new()
        .merge(public_routes)
        .merge(api_routes)
        .layer(TraceLayer::new_for_http())
}

/// 存活检查
pub async fn root() -> &'static str {
    "Play Store Scraper running"
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
