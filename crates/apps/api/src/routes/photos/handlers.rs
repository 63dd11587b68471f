use crate::api_state::ApiContext;
use axum::extract::{Multipart, Path, State};
use axum::Json;
use common_services::api::photos::error::PhotosError;
use common_services::api::photos::interfaces::{PhotoUploadForm, ProcessPhotoResponse};
use common_services::api::photos::service::process_event_photo;
use common_services::utils::read_upload;
use tracing::instrument;

/// Ingest one photo for an event.
///
/// The bytes are read fully into memory, stored under `{evento}/{filename}`,
/// and every detected face is indexed against the event's face-index. A
/// record is persisted only when both steps produced a usable result; a
/// pipeline failure is a 200 with `status: "error"`, not a fault.
#[utoipa::path(
    post,
    path = "/procesar-foto-evento/{evento}",
    tag = "Photos",
    params(
        ("evento" = String, Path, description = "Event name")
    ),
    request_body(content = PhotoUploadForm, content_type = "multipart/form-data", description = "The photo as a `file` field"),
    responses(
        (status = 200, description = "Pipeline outcome; inspect `status`.", body = ProcessPhotoResponse),
        (status = 400, description = "The request carried no file."),
        (status = 500, description = "A vision service or document store error occurred."),
    )
)]
#[instrument(skip(context, multipart), err(Debug))]
pub async fn process_photo_handler(
    State(context): State<ApiContext>,
    Path(evento): Path<String>,
    mut multipart: Multipart,
) -> Result<Json<ProcessPhotoResponse>, PhotosError> {
    let upload = read_upload(&mut multipart).await?;
    let result = process_event_photo(
        context.vision.as_ref(),
        context.catalog.as_ref(),
        &evento,
        &upload.file_name,
        upload.bytes,
    )
    .await?;
    Ok(Json(result))
}
