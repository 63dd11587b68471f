use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A photo record as written at insert time. The document store assigns the
/// identity; it is never supplied by the caller.
#[derive(Debug, Clone, Serialize)]
pub struct NewPhotoRecord {
    pub url: String,
    pub face_ids: Vec<String>,
    pub evento: String,
    pub nombre_archivo: String,
}

/// A photo record as read back from the document store. `nombre_archivo` is
/// optional on read: early records were written without it.
#[derive(Debug, Clone, Deserialize)]
pub struct StoredPhotoRecord {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub url: String,
    #[serde(default)]
    pub face_ids: Vec<String>,
    pub evento: String,
    #[serde(default)]
    pub nombre_archivo: Option<String>,
}

/// What a face-membership query returns per photo.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PhotoSummary {
    pub url: String,
    pub caras: usize,
    pub nombre: String,
}

impl From<StoredPhotoRecord> for PhotoSummary {
    fn from(record: StoredPhotoRecord) -> Self {
        Self {
            url: record.url,
            caras: record.face_ids.len(),
            nombre: record
                .nombre_archivo
                .unwrap_or_else(|| "foto.jpg".to_string()),
        }
    }
}
