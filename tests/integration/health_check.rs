// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use playshots::config::settings::LimitSettings;
use tower::util::ServiceExt;

use super::helpers::build_router;

/// 存活检查测试
///
/// 验证根路径返回纯文本存活信息
#[tokio::test]
async fn root_returns_liveness_text() {
    let app = build_router("http://127.0.0.1:9", &LimitSettings::default());

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"Play Store Scraper running");
}

/// 健康检查测试
#[tokio::test]
async fn health_check_works() {
    let app = build_router("http://127.0.0.1:9", &LimitSettings::default());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

/// 未知路径返回404
#[tokio::test]
async fn unknown_route_returns_404() {
    let app = build_router("http://127.0.0.1:9", &LimitSettings::default());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/v1/crawl")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
