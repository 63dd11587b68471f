use axum::extract::multipart::{Multipart, MultipartError};
use thiserror::Error;

/// A fully buffered multipart file upload. Uploads are read completely into
/// memory before any external call is made.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Reading the multipart body failed: {0}")]
    Multipart(#[from] MultipartError),

    #[error("The request contained no file field")]
    MissingFile,
}

/// Pulls the first file field out of a multipart body. Fields without a
/// filename (plain form values) are skipped.
pub async fn read_upload(multipart: &mut Multipart) -> Result<UploadedFile, UploadError> {
    while let Some(field) = multipart.next_field().await? {
        if field.file_name().is_none() && field.name() != Some("file") {
            continue;
        }
        let file_name = field
            .file_name()
            .unwrap_or("foto.jpg")
            .to_string();
        let bytes = field.bytes().await?.to_vec();
        return Ok(UploadedFile { file_name, bytes });
    }
    Err(UploadError::MissingFile)
}
