// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, Json},
    response::IntoResponse,
};
use std::sync::Arc;

use crate::{
    application::{
        dto::scrape_response::UploadResponseDto, use_cases::upload_use_case::UploadUseCase,
    },
    presentation::{errors::AppError, extractors::uploaded_files::UploadedFiles},
};

/// 上传截图并返回 data URI 列表
pub async fn upload_screens(
    Extension(use_case): Extension<Arc<UploadUseCase>>,
    UploadedFiles(files): UploadedFiles,
) -> Result<impl IntoResponse, AppError> {
    let result = use_case.encode(files)?;
    Ok(Json(UploadResponseDto::from(result)))
}
