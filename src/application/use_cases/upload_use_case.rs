// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;
use tracing::debug;

use crate::domain::{
    models::screenshot::{UploadResult, UploadedFile},
    services::data_uri::{encode_data_uri, FALLBACK_MIME},
};

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("No files uploaded")]
    NoFiles,
    #[error("File too large: {name} exceeds {limit} bytes")]
    FileTooLarge { name: String, limit: usize },
}

/// 上传编码用例
///
/// 把上传的文件按原顺序编码为 data URI
pub struct UploadUseCase {
    max_upload_bytes: usize,
}

impl UploadUseCase {
    pub fn new(max_upload_bytes: usize) -> Self {
        Self { max_upload_bytes }
    }

    pub fn encode(&self, files: Vec<UploadedFile>) -> Result<UploadResult, UploadError> {
        if files.is_empty() {
            return Err(UploadError::NoFiles);
        }

        if let Some(file) = files.iter().find(|f| f.bytes.len() > self.max_upload_bytes) {
            return Err(UploadError::FileTooLarge {
                name: file.file_name.clone().unwrap_or_default(),
                limit: self.max_upload_bytes,
            });
        }

        let screenshots = files
            .iter()
            .map(|file| {
                let mime = file.content_type.as_deref().unwrap_or(FALLBACK_MIME);
                encode_data_uri(mime, &file.bytes)
            })
            .collect::<Vec<_>>();

        debug!("Encoded {} uploaded files", screenshots.len());
        Ok(UploadResult { screenshots })
    }
}
