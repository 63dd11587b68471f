mod common;

use axum::http::StatusCode;
use common::{multipart_request, read_json, test_app, MemoryCatalog, StubVision};
use tower::ServiceExt;

const GROUP_PHOTO: &[u8] = b"jpeg face face face";
const STRANGER_SELFIE: &[u8] = b"jpeg face (someone else)";

#[tokio::test]
async fn uploaded_photo_is_found_by_identical_probe() {
    let test = test_app(StubVision::new(), MemoryCatalog::new());

    // ARRANGE: ingest a photo for the event.
    let upload = test
        .app
        .clone()
        .oneshot(multipart_request(
            "/procesar-foto-evento/boda2024",
            "grupo.jpg",
            GROUP_PHOTO,
        ))
        .await
        .expect("response");
    let upload_body = read_json(upload).await;
    assert_eq!(upload_body["status"], "procesado");

    // ACT: probe with the identical image, guaranteeing face-id overlap.
    let response = test
        .app
        .oneshot(multipart_request(
            "/buscar-mis-fotos/boda2024",
            "selfie.jpg",
            GROUP_PHOTO,
        ))
        .await
        .expect("response");

    // ASSERT: the photo's URL comes back.
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["mensaje"], "¡Encontramos 1 fotos!");
    let fotos = body["fotos"].as_array().expect("fotos");
    assert_eq!(fotos.len(), 1);
    assert_eq!(fotos[0]["url"], upload_body["url"]);
    assert_eq!(fotos[0]["caras"], 3);
    assert_eq!(fotos[0]["nombre"], "grupo.jpg");
}

#[tokio::test]
async fn probing_an_event_without_index_reports_the_missing_index() {
    let test = test_app(StubVision::new(), MemoryCatalog::new());

    let response = test
        .app
        .oneshot(multipart_request(
            "/buscar-mis-fotos/desconocido",
            "selfie.jpg",
            STRANGER_SELFIE,
        ))
        .await
        .expect("response");

    // A missing face-index is a user-facing message, never a fault.
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["error"], "El evento no tiene un índice de caras creado.");
    assert_eq!(body["fotos"].as_array().expect("fotos").len(), 0);
}

#[tokio::test]
async fn unknown_face_yields_no_matches_message() {
    let test = test_app(StubVision::new(), MemoryCatalog::new());

    test.app
        .clone()
        .oneshot(multipart_request(
            "/procesar-foto-evento/boda2024",
            "grupo.jpg",
            GROUP_PHOTO,
        ))
        .await
        .expect("response");

    let response = test
        .app
        .oneshot(multipart_request(
            "/buscar-mis-fotos/boda2024",
            "selfie.jpg",
            STRANGER_SELFIE,
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["mensaje"], "No encontramos fotos tuyas");
    assert_eq!(body["fotos"].as_array().expect("fotos").len(), 0);
}
