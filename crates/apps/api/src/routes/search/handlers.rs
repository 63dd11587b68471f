use crate::api_state::ApiContext;
use axum::extract::{Multipart, Path, State};
use axum::Json;
use common_services::api::search::error::SearchError;
use common_services::api::photos::interfaces::PhotoUploadForm;
use common_services::api::search::interfaces::SearchPhotosResponse;
use common_services::api::search::service::search_photos;
use common_services::utils::read_upload;
use tracing::instrument;

/// Find an attendee's photos by selfie.
///
/// The probe image is matched against the event's face-index; matched face
/// identifiers are resolved to photo records. Photo order in the response is
/// unspecified. A search failure (including an event with no face-index)
/// surfaces as a 200 body with an `error` field and an empty `fotos` list.
#[utoipa::path(
    post,
    path = "/buscar-mis-fotos/{evento}",
    tag = "Search",
    params(
        ("evento" = String, Path, description = "Event name")
    ),
    request_body(content = PhotoUploadForm, content_type = "multipart/form-data", description = "The selfie as a `file` field"),
    responses(
        (status = 200, description = "Matching photos, or a message; inspect `error`.", body = SearchPhotosResponse),
        (status = 400, description = "The request carried no file."),
    )
)]
#[instrument(skip(context, multipart), err(Debug))]
pub async fn search_photos_handler(
    State(context): State<ApiContext>,
    Path(evento): Path<String>,
    mut multipart: Multipart,
) -> Result<Json<SearchPhotosResponse>, SearchError> {
    let upload = read_upload(&mut multipart).await?;
    let result = search_photos(
        context.vision.as_ref(),
        context.catalog.as_ref(),
        &evento,
        upload.bytes,
    )
    .await?;
    Ok(Json(result))
}
