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
    extract::{Extension, Json},
    response::IntoResponse,
};
use std::sync::Arc;

use crate::{
    application::{
        dto::scrape_response::ScrapeResponseDto, use_cases::scrape_use_case::ScrapeUseCase,
    },
    presentation::{errors::AppError, extractors::scrape_body::ScrapeBody},
};

/// 抓取商店截图
///
/// 请求体 `{ "url": "<商店链接>" }`（或表单 `url=...`），
/// 成功时返回包名与截图 data URI 列表
pub async fn scrape(
    Extension(use_case): Extension<Arc<ScrapeUseCase>>,
    ScrapeBody(dto): ScrapeBody,
) -> Result<impl IntoResponse, AppError> {
    let result = use_case.execute(dto).await?;
    Ok(Json(ScrapeResponseDto::from(result)))
}
