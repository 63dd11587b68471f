use super::error::PhotosError;
use super::interfaces::ProcessPhotoResponse;
use crate::catalog::{NewPhotoRecord, PhotoCatalog};
use crate::vision::FaceVision;
use tracing::{info, instrument, warn};

const PIPELINE_FAILED: &str = "No se detectaron caras o error en S3";

/// Object key for an uploaded photo. The `{event}/` prefix is what keeps
/// events isolated in the bucket.
pub fn object_key(event: &str, file_name: &str) -> String {
    format!("{event}/{file_name}")
}

/// Runs the upload pipeline for one photo: store the bytes, index the faces,
/// persist the record. A record is persisted only when both the upload and
/// the indexing produced a usable result; otherwise the response carries an
/// error status and an already-stored object is compensatingly deleted.
#[instrument(skip(vision, catalog, bytes), fields(size = bytes.len()))]
pub async fn process_event_photo(
    vision: &dyn FaceVision,
    catalog: &dyn PhotoCatalog,
    event: &str,
    file_name: &str,
    bytes: Vec<u8>,
) -> Result<ProcessPhotoResponse, PhotosError> {
    let key = object_key(event, file_name);

    // The face-index may not exist yet; creation is idempotent and must
    // precede indexing.
    vision.ensure_index(event).await?;

    let url = vision.store_object(bytes.clone(), &key).await;
    let faces = vision.index_faces(event, bytes, file_name).await;
    let face_ids: Vec<String> = faces.into_iter().map(|face| face.face_id).collect();

    let Some(url) = url else {
        return Ok(ProcessPhotoResponse::error(PIPELINE_FAILED));
    };

    if face_ids.is_empty() {
        warn!("No faces detected in '{key}', rolling back the stored object");
        vision.delete_object(&key).await;
        return Ok(ProcessPhotoResponse::error(PIPELINE_FAILED));
    }

    let record = NewPhotoRecord {
        url: url.clone(),
        face_ids: face_ids.clone(),
        evento: event.to_string(),
        nombre_archivo: file_name.to_string(),
    };
    let mongo_id = match catalog.save_photo(event, record).await {
        Ok(id) => id,
        Err(err) => {
            vision.delete_object(&key).await;
            return Err(err.into());
        }
    };

    info!(
        "Processed '{key}': {} face(s) indexed, record {mongo_id}",
        face_ids.len()
    );
    Ok(ProcessPhotoResponse::processed(
        face_ids.len(),
        url,
        mongo_id,
    ))
}
