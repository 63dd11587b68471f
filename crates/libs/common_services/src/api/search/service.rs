use super::error::SearchError;
use super::interfaces::SearchPhotosResponse;
use crate::catalog::PhotoCatalog;
use crate::vision::FaceVision;
use tracing::{info, instrument};

/// Matches a probe image against an event's face-index and resolves the
/// matched face identifiers to photo records.
#[instrument(skip(vision, catalog, probe_bytes), fields(size = probe_bytes.len()))]
pub async fn search_photos(
    vision: &dyn FaceVision,
    catalog: &dyn PhotoCatalog,
    event: &str,
    probe_bytes: Vec<u8>,
) -> Result<SearchPhotosResponse, SearchError> {
    let matches = match vision.search_by_probe(event, probe_bytes).await {
        Ok(matches) => matches,
        Err(failure) => return Ok(SearchPhotosResponse::failed(failure.to_string())),
    };

    let face_ids: Vec<String> = matches.into_iter().map(|m| m.face_id).collect();
    if face_ids.is_empty() {
        return Ok(SearchPhotosResponse::no_matches());
    }

    let fotos = catalog.find_photos_by_faces(event, &face_ids).await;
    info!(
        "Probe against '{event}' matched {} face id(s), {} photo(s)",
        face_ids.len(),
        fotos.len()
    );
    Ok(SearchPhotosResponse::found(fotos))
}
