// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::http::StatusCode;
use axum_test::multipart::{MultipartForm, Part};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use playshots::config::settings::LimitSettings;
use serde_json::Value;

use super::helpers::{create_test_server, create_test_server_with_limits};

fn decode(uri: &str) -> (String, Vec<u8>) {
    let (mime, payload) = uri
        .strip_prefix("data:")
        .unwrap()
        .split_once(";base64,")
        .unwrap();
    (mime.to_string(), STANDARD.decode(payload).unwrap())
}

/// 两个文件按上传顺序返回，解码后与原始内容一致
#[tokio::test]
async fn upload_two_files_round_trips_in_order() {
    let server = create_test_server("http://127.0.0.1:9");
    let form = MultipartForm::new()
        .add_part(
            "files",
            Part::bytes(b"\x89PNG first".to_vec())
                .file_name("first.png")
                .mime_type("image/png"),
        )
        .add_part(
            "files",
            Part::bytes(b"\xff\xd8\xff second".to_vec())
                .file_name("second.jpg")
                .mime_type("image/jpeg"),
        );

    let response = server.post("/upload-screens").multipart(form).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    let screenshots = body["screenshots"].as_array().unwrap();
    assert_eq!(screenshots.len(), 2);
    assert_eq!(
        decode(screenshots[0].as_str().unwrap()),
        ("image/png".to_string(), b"\x89PNG first".to_vec())
    );
    assert_eq!(
        decode(screenshots[1].as_str().unwrap()),
        ("image/jpeg".to_string(), b"\xff\xd8\xff second".to_vec())
    );
}

/// 单个文件同样返回列表
#[tokio::test]
async fn upload_single_file_returns_list() {
    let server = create_test_server("http://127.0.0.1:9");
    let form = MultipartForm::new()
        .add_text("note", "ignored")
        .add_part(
            "files",
            Part::bytes(b"GIF89a".to_vec())
                .file_name("one.gif")
                .mime_type("image/gif"),
        );

    let response = server.post("/upload-screens").multipart(form).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["screenshots"].as_array().unwrap().len(), 1);
    assert_eq!(body["screenshots"][0], "data:image/gif;base64,R0lGODlh");
}

/// 表单中没有文件返回400
#[tokio::test]
async fn upload_without_files_returns_400() {
    let server = create_test_server("http://127.0.0.1:9");
    let form = MultipartForm::new().add_text("other", "value");

    let response = server.post("/upload-screens").multipart(form).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "No files uploaded");
}

/// 非 multipart 请求同样视为没有文件
#[tokio::test]
async fn upload_without_multipart_body_returns_400() {
    let server = create_test_server("http://127.0.0.1:9");

    let response = server.post("/upload-screens").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "No files uploaded");
}

/// 超过单文件上限返回413
#[tokio::test]
async fn upload_oversized_file_returns_413() {
    let limits = LimitSettings {
        max_upload_bytes: 8,
        max_request_bytes: 1024 * 1024,
    };
    let server = create_test_server_with_limits("http://127.0.0.1:9", &limits);
    let form = MultipartForm::new().add_part(
        "files",
        Part::bytes(vec![0u8; 64])
            .file_name("big.bin")
            .mime_type("application/octet-stream"),
    );

    let response = server.post("/upload-screens").multipart(form).await;

    assert_eq!(response.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("big.bin"));
}
