//! Bootcamp photo uploads.

use axum::{body::Bytes, extract::Multipart};
use std::path::Path;

use crate::server::error::AppError;

/// Multipart field carrying the photo.
pub const PHOTO_FIELD: &str = "file";

/// A photo read from a multipart request, not yet validated.
#[derive(Debug, Clone)]
pub struct PhotoUpload {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub data: Bytes,
}

impl PhotoUpload {
    /// Reads the photo field from a multipart body, skipping any other fields.
    ///
    /// Stops reading as soon as the photo exceeds `max_bytes`.
    ///
    /// # Returns
    /// - `Ok(PhotoUpload)` - The photo field
    /// - `Err(AppError::BadRequest)` - No photo field, or the photo is too large
    /// - `Err(AppError::MultipartErr)` - Malformed multipart body
    pub async fn from_multipart(multipart: &mut Multipart, max_bytes: u64) -> Result<Self, AppError> {
        while let Some(mut field) = multipart.next_field().await? {
            if field.name() != Some(PHOTO_FIELD) {
                continue;
            }

            let file_name = field.file_name().map(str::to_string);
            let content_type = field.content_type().map(str::to_string);

            let mut data = Vec::new();
            while let Some(chunk) = field.chunk().await? {
                data.extend_from_slice(&chunk);
                if data.len() as u64 > max_bytes {
                    return Err(too_large(max_bytes));
                }
            }

            return Ok(Self {
                file_name,
                content_type,
                data: Bytes::from(data),
            });
        }

        Err(AppError::BadRequest("Please upload a file".to_string()))
    }

    /// Checks the upload is a non-empty image within the size limit.
    pub fn validate(&self, max_bytes: u64) -> Result<(), AppError> {
        if self.data.is_empty() {
            return Err(AppError::BadRequest("Please upload a file".to_string()));
        }

        let is_image = self
            .content_type
            .as_deref()
            .is_some_and(|ct| ct.starts_with("image/"));
        if !is_image {
            return Err(AppError::BadRequest("Please upload an image file".to_string()));
        }

        if self.data.len() as u64 > max_bytes {
            return Err(too_large(max_bytes));
        }

        Ok(())
    }

    /// File extension including the dot, from the original file name or else the mime
    /// subtype, e.g. `.jpg`.
    pub fn extension(&self) -> String {
        let from_name = self
            .file_name
            .as_deref()
            .and_then(|name| Path::new(name).extension())
            .and_then(|ext| ext.to_str())
            .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()));

        if let Some(ext) = from_name {
            return format!(".{}", ext.to_lowercase());
        }

        let subtype = self
            .content_type
            .as_deref()
            .and_then(|ct| ct.split('/').nth(1))
            .map(|sub| sub.split(['+', ';']).next().unwrap_or(sub).trim())
            .filter(|sub| !sub.is_empty());

        match subtype {
            Some("jpeg") => ".jpg".to_string(),
            Some(sub) => format!(".{}", sub),
            None => String::new(),
        }
    }

    /// Writes the photo as `photo_{bootcamp_id}{ext}` under `dir`, creating the directory
    /// if needed.
    ///
    /// # Returns
    /// - `Ok(String)` - The stored file name
    /// - `Err(AppError::IoErr)` - Directory or file could not be written
    pub async fn save(&self, dir: &Path, bootcamp_id: i32) -> Result<String, AppError> {
        let file_name = format!("photo_{}{}", bootcamp_id, self.extension());

        tokio::fs::create_dir_all(dir).await?;
        tokio::fs::write(dir.join(&file_name), &self.data).await?;

        Ok(file_name)
    }
}

fn too_large(max_bytes: u64) -> AppError {
    AppError::BadRequest(format!("Please upload an image less than {} bytes", max_bytes))
}
