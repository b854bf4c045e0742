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

use axum::extract::multipart::MultipartError;
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::StatusCode;
use tracing::debug;

use crate::domain::models::screenshot::UploadedFile;
use crate::presentation::errors::{AppError, RequestError};

/// 上传文件所在的表单字段名
const FILES_FIELD: &str = "files";
const FILES_ARRAY_FIELD: &str = "files[]";

/// 上传文件提取器
///
/// 把 multipart 表单中名为 `files`（或 `files[]`）的文件部分
/// 按到达顺序整理成列表，单个文件与多个文件得到同一种结构。
/// 非 multipart 请求得到空列表，由用例返回 "No files uploaded"
pub struct UploadedFiles(pub Vec<UploadedFile>);

impl<S> FromRequest<S> for UploadedFiles
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut multipart = match Multipart::from_request(req, state).await {
            Ok(multipart) => multipart,
            Err(rejection) => {
                debug!("Upload without multipart body: {}", rejection.body_text());
                return Ok(Self(Vec::new()));
            }
        };

        let mut files = Vec::new();
        while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
            let is_files_field = matches!(field.name(), Some(FILES_FIELD) | Some(FILES_ARRAY_FIELD));
            // Plain text parts carry no file name and are not uploads
            if !is_files_field || field.file_name().is_none() {
                continue;
            }

            let file_name = field.file_name().map(str::to_string);
            let content_type = field.content_type().map(str::to_string);
            let bytes = field.bytes().await.map_err(multipart_error)?;

            files.push(UploadedFile {
                file_name,
                content_type,
                bytes,
            });
        }

        Ok(Self(files))
    }
}

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        RequestError::BodyTooLarge(err.body_text()).into()
    } else {
        RequestError::InvalidMultipart(err.body_text()).into()
    }
}
