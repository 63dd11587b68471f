use super::error::{SearchFailure, VisionError};
use super::interfaces::{FaceMatch, IndexOutcome, IndexedFace};
use app_state::AppSettings;
use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_rekognition::primitives::Blob;
use aws_sdk_rekognition::types::{Attribute, Image};
use aws_sdk_s3::config::Credentials;
use aws_sdk_s3::primitives::ByteStream;
use tracing::{debug, error, warn};

/// Face detection, indexing and similarity search, plus durable storage for
/// the image bytes themselves.
///
/// Implementations are long-lived, hold no per-request state, and are safe
/// to share across concurrent requests behind an `Arc`.
#[async_trait]
pub trait FaceVision: Send + Sync {
    /// Idempotently creates the face-index for an event. "Already exists" is
    /// success; any other service failure propagates.
    async fn ensure_index(&self, event: &str) -> Result<IndexOutcome, VisionError>;

    /// Uploads image bytes under `key` and returns the public URL, or `None`
    /// after logging the failure.
    async fn store_object(&self, bytes: Vec<u8>, key: &str) -> Option<String>;

    /// Best-effort removal of a stored object; failures are logged and
    /// swallowed.
    async fn delete_object(&self, key: &str);

    /// Detects and indexes every face in the image against the event's
    /// face-index. Returns an empty list on failure.
    async fn index_faces(
        &self,
        event: &str,
        bytes: Vec<u8>,
        external_label: &str,
    ) -> Vec<IndexedFace>;

    /// Similarity search of the event's face-index by a probe image. Zero
    /// matches is `Ok(vec![])`, not a failure.
    async fn search_by_probe(
        &self,
        event: &str,
        bytes: Vec<u8>,
    ) -> Result<Vec<FaceMatch>, SearchFailure>;

    /// Best-effort removal of the event's face-index.
    async fn delete_index(&self, event: &str);
}

/// `FaceVision` backed by AWS Rekognition and S3.
#[derive(Clone)]
pub struct RekognitionVision {
    rekognition: aws_sdk_rekognition::Client,
    s3: aws_sdk_s3::Client,
    bucket: String,
    region: String,
    face_match_threshold: f32,
    max_faces: i32,
}

impl RekognitionVision {
    pub async fn from_settings(settings: &AppSettings) -> Self {
        let credentials = Credentials::from_keys(
            &settings.secrets.aws_access_key_id,
            &settings.secrets.aws_secret_access_key,
            None,
        );
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(settings.storage.region.clone()))
            .credentials_provider(credentials)
            .load()
            .await;

        Self {
            rekognition: aws_sdk_rekognition::Client::new(&sdk_config),
            s3: aws_sdk_s3::Client::new(&sdk_config),
            bucket: settings.storage.bucket.clone(),
            region: settings.storage.region.clone(),
            face_match_threshold: settings.vision.face_match_threshold,
            max_faces: settings.vision.max_faces,
        }
    }

    fn public_url(&self, key: &str) -> String {
        format!(
            "https://{}.s3.{}.amazonaws.com/{key}",
            self.bucket, self.region
        )
    }
}

/// Rekognition rejects path separators in external image ids.
pub fn sanitize_external_id(label: &str) -> String {
    label.replace('/', "_")
}

#[async_trait]
impl FaceVision for RekognitionVision {
    async fn ensure_index(&self, event: &str) -> Result<IndexOutcome, VisionError> {
        match self
            .rekognition
            .create_collection()
            .collection_id(event)
            .send()
            .await
        {
            Ok(output) => Ok(IndexOutcome::Created {
                collection_arn: output.collection_arn().map(str::to_string),
                face_model_version: output.face_model_version().map(str::to_string),
            }),
            Err(err) => {
                let service_err = err.into_service_error();
                if service_err.is_resource_already_exists_exception() {
                    Ok(IndexOutcome::AlreadyExists)
                } else {
                    Err(VisionError::Rekognition(service_err.into()))
                }
            }
        }
    }

    async fn store_object(&self, bytes: Vec<u8>, key: &str) -> Option<String> {
        let result = self
            .s3
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(bytes))
            .content_type("image/jpeg")
            .send()
            .await;

        match result {
            Ok(_) => Some(self.public_url(key)),
            Err(err) => {
                error!(
                    "S3 upload of '{key}' failed: {}",
                    aws_sdk_s3::error::DisplayErrorContext(&err)
                );
                None
            }
        }
    }

    async fn delete_object(&self, key: &str) {
        if let Err(err) = self
            .s3
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
        {
            warn!(
                "Compensating delete of '{key}' failed, object is orphaned: {}",
                aws_sdk_s3::error::DisplayErrorContext(&err)
            );
        }
    }

    async fn index_faces(
        &self,
        event: &str,
        bytes: Vec<u8>,
        external_label: &str,
    ) -> Vec<IndexedFace> {
        let image = Image::builder().bytes(Blob::new(bytes)).build();
        let result = self
            .rekognition
            .index_faces()
            .collection_id(event)
            .image(image)
            .external_image_id(sanitize_external_id(external_label))
            .detection_attributes(Attribute::All)
            .send()
            .await;

        match result {
            Ok(output) => output
                .face_records()
                .iter()
                .filter_map(|record| {
                    let face = record.face()?;
                    Some(IndexedFace {
                        face_id: face.face_id()?.to_string(),
                        external_image_id: face.external_image_id().map(str::to_string),
                    })
                })
                .collect(),
            Err(err) => {
                error!(
                    "IndexFaces against '{event}' failed: {}",
                    aws_sdk_rekognition::error::DisplayErrorContext(&err)
                );
                Vec::new()
            }
        }
    }

    async fn search_by_probe(
        &self,
        event: &str,
        bytes: Vec<u8>,
    ) -> Result<Vec<FaceMatch>, SearchFailure> {
        debug!("Searching face-index '{event}'");
        let image = Image::builder().bytes(Blob::new(bytes)).build();
        let result = self
            .rekognition
            .search_faces_by_image()
            .collection_id(event)
            .image(image)
            .max_faces(self.max_faces)
            .face_match_threshold(self.face_match_threshold)
            .send()
            .await;

        match result {
            Ok(output) => Ok(output
                .face_matches()
                .iter()
                .filter_map(|candidate| {
                    Some(FaceMatch {
                        face_id: candidate.face()?.face_id()?.to_string(),
                        similarity: candidate.similarity()?,
                    })
                })
                .collect()),
            Err(err) => {
                let service_err = err.into_service_error();
                if service_err.is_resource_not_found_exception() {
                    warn!("Face-index '{event}' does not exist");
                    Err(SearchFailure::IndexMissing)
                } else {
                    let report = aws_sdk_rekognition::Error::from(service_err);
                    error!("SearchFacesByImage against '{event}' failed: {report}");
                    Err(SearchFailure::Service(report.to_string()))
                }
            }
        }
    }

    async fn delete_index(&self, event: &str) {
        if let Err(err) = self
            .rekognition
            .delete_collection()
            .collection_id(event)
            .send()
            .await
        {
            warn!(
                "Deleting face-index '{event}' failed: {}",
                aws_sdk_rekognition::error::DisplayErrorContext(&err)
            );
        }
    }
}
