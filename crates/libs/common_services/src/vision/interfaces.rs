/// Result of an idempotent face-index creation. Repeated creation for the
/// same event is expected (it runs on every photo upload), so "already
/// exists" is a success, not a failure.
#[derive(Debug, Clone, PartialEq)]
pub enum IndexOutcome {
    Created {
        collection_arn: Option<String>,
        face_model_version: Option<String>,
    },
    AlreadyExists,
}

/// One face the vision service detected and indexed in an uploaded photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedFace {
    pub face_id: String,
    pub external_image_id: Option<String>,
}

/// One similarity-ranked candidate from a probe-image search.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceMatch {
    pub face_id: String,
    pub similarity: f32,
}
