// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::{Form, Json};

use crate::application::dto::scrape_request::ScrapeRequestDto;
use crate::presentation::errors::{AppError, RequestError};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// 抓取请求体提取器
///
/// `application/x-www-form-urlencoded` 请求按表单解析，其余按 JSON 解析。
/// 拒绝原因统一转换为 `{ "error": ... }` 响应，超限返回413
pub struct ScrapeBody(pub ScrapeRequestDto);

impl<S> FromRequest<S> for ScrapeBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.trim().to_ascii_lowercase().starts_with(FORM_CONTENT_TYPE));

        let dto = if is_form {
            let Form(dto) = Form::<ScrapeRequestDto>::from_request(req, state)
                .await
                .map_err(|e| RequestError::from_rejection(e.status(), e.body_text()))?;
            dto
        } else {
            let Json(dto) = Json::<ScrapeRequestDto>::from_request(req, state)
                .await
                .map_err(|e| RequestError::from_rejection(e.status(), e.body_text()))?;
            dto
        };

        Ok(Self(dto))
    }
}
