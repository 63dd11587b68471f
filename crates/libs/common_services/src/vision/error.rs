use thiserror::Error;

#[derive(Debug, Error)]
pub enum VisionError {
    #[error("Vision service error: {0}")]
    Rekognition(#[from] aws_sdk_rekognition::Error),
}

/// Why a probe search produced no result. A missing index is distinguished
/// from other service failures so the caller can show a meaningful message
/// for events that never had a photo uploaded.
#[derive(Debug, Error)]
pub enum SearchFailure {
    #[error("El evento no tiene un índice de caras creado.")]
    IndexMissing,

    #[error("{0}")]
    Service(String),
}
