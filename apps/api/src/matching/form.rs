use std::collections::HashMap;

use axum::extract::Multipart;
use bytes::Bytes;

use crate::errors::AppError;

/// A fully buffered `multipart/form-data` upload.
///
/// Parts carrying a filename are kept as file bytes; the rest are read as text.
/// Repeated names keep the last value.
#[derive(Debug, Default)]
pub struct UploadForm {
    files: HashMap<String, Bytes>,
    texts: HashMap<String, String>,
}

impl UploadForm {
    pub async fn read(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = UploadForm::default();
        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };
            if field.file_name().is_some() {
                let data = field.bytes().await?;
                form.files.insert(name, data);
            } else {
                let value = field.text().await?;
                form.texts.insert(name, value);
            }
        }
        Ok(form)
    }

    /// Non-empty file upload under `name`. Zero-byte uploads count as absent.
    pub fn file(&mut self, name: &str) -> Option<Bytes> {
        self.files.remove(name).filter(|data| !data.is_empty())
    }

    /// Non-empty text value under `name`.
    pub fn text(&mut self, name: &str) -> Option<String> {
        self.texts.remove(name).filter(|value| !value.is_empty())
    }

    pub fn require_file(&mut self, name: &str) -> Result<Bytes, AppError> {
        self.file(name).ok_or_else(|| {
            AppError::UnprocessableEntity(format!("missing required file field '{name}'"))
        })
    }
}
