// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::http::StatusCode;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use playshots::config::settings::LimitSettings;

use super::helpers::{create_test_server, create_test_server_with_limits};

async fn mount_listing(server: &MockServer, package: &str, html: String) {
    Mock::given(method("GET"))
        .and(path("/store/apps/details"))
        .and(query_param("id", package))
        .respond_with(ResponseTemplate::new(200).set_body_string(html))
        .mount(server)
        .await;
}

/// 完整抓取流程：去重、跳过失败图片、保持顺序
#[tokio::test]
async fn scrape_returns_package_and_screenshots() {
    let upstream = MockServer::start().await;
    let cdn = format!("{}/cdn", upstream.uri());
    let html = format!(
        r#"<img src="{cdn}/a=w526-h296"><img src="{cdn}/dead=w526-h296"><img src="{cdn}/b=w526-h296"><img src="{cdn}/a=w526-h296">"#
    );
    mount_listing(&upstream, "com.todoist", html).await;
    for (image, status, body) in [
        ("/cdn/a=w526-h296", 200u16, &b"image-a"[..]),
        ("/cdn/dead=w526-h296", 503, &b""[..]),
        ("/cdn/b=w526-h296", 200, &b"image-b"[..]),
    ] {
        Mock::given(method("GET"))
            .and(path(image))
            .respond_with(ResponseTemplate::new(status).set_body_bytes(body.to_vec()))
            .mount(&upstream)
            .await;
    }

    let server = create_test_server(&upstream.uri());
    let response = server
        .post("/scrape")
        .json(&json!({ "url": "https://play.google.com/store/apps/details?id=com.todoist" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["package"], "com.todoist");

    let screenshots = body["screenshots"].as_array().unwrap();
    let decoded: Vec<Vec<u8>> = screenshots
        .iter()
        .map(|s| {
            let payload = s
                .as_str()
                .unwrap()
                .strip_prefix("data:image/png;base64,")
                .unwrap();
            STANDARD.decode(payload).unwrap()
        })
        .collect();
    assert_eq!(decoded, vec![b"image-a".to_vec(), b"image-b".to_vec()]);
}

/// market:// 链接同样可用
#[tokio::test]
async fn scrape_accepts_market_uri() {
    let upstream = MockServer::start().await;
    mount_listing(&upstream, "com.whatsapp", "<html></html>".to_string()).await;

    let server = create_test_server(&upstream.uri());
    let response = server
        .post("/scrape")
        .json(&json!({ "url": "market://details?id=com.whatsapp" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["package"], "com.whatsapp");
    assert_eq!(body["screenshots"], json!([]));
}

/// 缺少 url 返回400
#[tokio::test]
async fn scrape_without_url_returns_400() {
    let server = create_test_server("http://127.0.0.1:9");

    let response = server.post("/scrape").json(&json!({})).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Missing url in body");
}

/// 无法解析出包名返回400
#[tokio::test]
async fn scrape_without_package_id_returns_400() {
    let server = create_test_server("http://127.0.0.1:9");

    let response = server
        .post("/scrape")
        .json(&json!({ "url": "https://play.google.com/store/apps" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Invalid Play Store URL (no id param)");
}

/// 非 JSON 请求体返回400并带 error 字段
#[tokio::test]
async fn scrape_with_malformed_body_returns_400() {
    let server = create_test_server("http://127.0.0.1:9");

    let response = server
        .post("/scrape")
        .content_type("application/json")
        .bytes("{not json".into())
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].as_str().is_some());
}

/// 详情页抓取失败返回500
#[tokio::test]
async fn scrape_listing_failure_returns_500() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/store/apps/details"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&upstream)
        .await;

    let server = create_test_server(&upstream.uri());
    let response = server
        .post("/scrape")
        .json(&json!({ "url": "https://play.google.com/store/apps/details?id=com.blocked" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("403"));
}

/// 表单请求体同样可用
#[tokio::test]
async fn scrape_accepts_form_body() {
    let upstream = MockServer::start().await;
    mount_listing(&upstream, "com.form", "<html></html>".to_string()).await;

    let server = create_test_server(&upstream.uri());
    let response = server
        .post("/scrape")
        .form(&[("url", "https://play.google.com/store/apps/details?id=com.form")])
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["package"], "com.form");
}

/// 表单中的链接没有包名时返回400
#[tokio::test]
async fn scrape_form_without_package_id_returns_400() {
    let server = create_test_server("http://127.0.0.1:9");

    let response = server
        .post("/scrape")
        .form(&[("url", "https://play.google.com/store/apps/details?hl=en")])
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Invalid Play Store URL (no id param)");
}

/// 请求体超过上限返回413
#[tokio::test]
async fn scrape_oversized_body_returns_413() {
    let limits = LimitSettings {
        max_request_bytes: 64,
        ..LimitSettings::default()
    };
    let server = create_test_server_with_limits("http://127.0.0.1:9", &limits);

    let response = server
        .post("/scrape")
        .json(&json!({ "url": "x".repeat(500) }))
        .await;

    assert_eq!(response.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
    let body: Value = response.json();
    assert!(body["error"].as_str().is_some());
}
