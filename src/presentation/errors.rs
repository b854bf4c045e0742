// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::application::use_cases::{scrape_use_case::ScrapeError, upload_use_case::UploadError};

/// 请求解析错误
///
/// 请求体在进入用例之前就无法使用时产生
#[derive(Error, Debug)]
pub enum RequestError {
    /// 请求体格式错误
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
    /// multipart 表单格式错误
    #[error("Invalid multipart body: {0}")]
    InvalidMultipart(String),
    /// 请求体超过大小上限
    #[error("Request body too large: {0}")]
    BodyTooLarge(String),
}

impl RequestError {
    /// 按拒绝原因的状态码归类，超限单独标出
    pub fn from_rejection(status: StatusCode, message: String) -> Self {
        if status == StatusCode::PAYLOAD_TOO_LARGE {
            RequestError::BodyTooLarge(message)
        } else {
            RequestError::InvalidBody(message)
        }
    }
}

/// 应用错误类型
///
/// 封装所有可能的应用层错误，提供统一的错误处理接口。
/// 响应体统一为 `{ "error": "<message>" }`，消息原样返回
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl AppError {
    /// 错误对应的 HTTP 状态码
    pub fn status(&self) -> StatusCode {
        if let Some(err) = self.0.downcast_ref::<RequestError>() {
            return match err {
                RequestError::InvalidBody(_) | RequestError::InvalidMultipart(_) => {
                    StatusCode::BAD_REQUEST
                }
                RequestError::BodyTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            };
        }

        if let Some(err) = self.0.downcast_ref::<ScrapeError>() {
            return match err {
                ScrapeError::MissingUrl | ScrapeError::InvalidListingUrl => StatusCode::BAD_REQUEST,
                ScrapeError::Fetch(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
        }

        if let Some(err) = self.0.downcast_ref::<UploadError>() {
            return match err {
                UploadError::NoFiles => StatusCode::BAD_REQUEST,
                UploadError::FileTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            };
        }

        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = self.0.to_string();

        if status.is_server_error() {
            error!("Request failed: {:#}", self.0);
        }

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
