#![allow(dead_code)]

use api::api_state::ApiContext;
use api::create_router;
use app_state::{
    ApiSettings, AppSettings, CatalogSettings, LoggingSettings, SecretSettings, StorageSettings,
    VisionSettings, COLLECTION_PREFIX,
};
use async_trait::async_trait;
use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use common_services::catalog::{CatalogError, NewPhotoRecord, PhotoCatalog, PhotoSummary};
use common_services::vision::{
    FaceMatch, FaceVision, IndexOutcome, IndexedFace, SearchFailure, VisionError,
};
use http_body_util::BodyExt;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// In-memory `FaceVision`: "detects" one face per occurrence of the marker
/// `face` in the image bytes, with content-derived face ids so an identical
/// probe image always matches its own upload.
#[derive(Default)]
pub struct StubVision {
    pub indexes: Mutex<HashSet<String>>,
    pub objects: Mutex<HashMap<String, Vec<u8>>>,
    pub deleted_objects: Mutex<Vec<String>>,
    pub indexed_faces: Mutex<HashMap<String, HashSet<String>>>,
    pub fail_store: bool,
}

impl StubVision {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_store() -> Self {
        Self {
            fail_store: true,
            ..Self::default()
        }
    }

    fn derive_face_ids(bytes: &[u8]) -> Vec<String> {
        let marker = b"face";
        let count = bytes
            .windows(marker.len())
            .filter(|window| window == marker)
            .count();
        (0..count)
            .map(|i| format!("face-{:016x}-{i}", digest(bytes)))
            .collect()
    }
}

fn digest(bytes: &[u8]) -> u64 {
    bytes.iter().fold(1_469_598_103_934_665_603_u64, |hash, b| {
        (hash ^ u64::from(*b)).wrapping_mul(1_099_511_628_211)
    })
}

#[async_trait]
impl FaceVision for StubVision {
    async fn ensure_index(&self, event: &str) -> Result<IndexOutcome, VisionError> {
        let mut indexes = self.indexes.lock().expect("lock");
        if indexes.insert(event.to_string()) {
            Ok(IndexOutcome::Created {
                collection_arn: Some(format!("arn:aws:rekognition:test:collection/{event}")),
                face_model_version: Some("7.0".to_string()),
            })
        } else {
            Ok(IndexOutcome::AlreadyExists)
        }
    }

    async fn store_object(&self, bytes: Vec<u8>, key: &str) -> Option<String> {
        if self.fail_store {
            return None;
        }
        self.objects
            .lock()
            .expect("lock")
            .insert(key.to_string(), bytes);
        Some(format!("https://test-bucket.s3.test.amazonaws.com/{key}"))
    }

    async fn delete_object(&self, key: &str) {
        self.objects.lock().expect("lock").remove(key);
        self.deleted_objects.lock().expect("lock").push(key.to_string());
    }

    async fn index_faces(
        &self,
        event: &str,
        bytes: Vec<u8>,
        _external_label: &str,
    ) -> Vec<IndexedFace> {
        let face_ids = Self::derive_face_ids(&bytes);
        let mut indexed = self.indexed_faces.lock().expect("lock");
        let event_faces = indexed.entry(event.to_string()).or_default();
        face_ids
            .into_iter()
            .map(|face_id| {
                event_faces.insert(face_id.clone());
                IndexedFace {
                    face_id,
                    external_image_id: None,
                }
            })
            .collect()
    }

    async fn search_by_probe(
        &self,
        event: &str,
        bytes: Vec<u8>,
    ) -> Result<Vec<FaceMatch>, SearchFailure> {
        if !self.indexes.lock().expect("lock").contains(event) {
            return Err(SearchFailure::IndexMissing);
        }
        let indexed = self.indexed_faces.lock().expect("lock");
        let known = indexed.get(event).cloned().unwrap_or_default();
        Ok(Self::derive_face_ids(&bytes)
            .into_iter()
            .filter(|face_id| known.contains(face_id))
            .map(|face_id| FaceMatch {
                face_id,
                similarity: 99.0,
            })
            .collect())
    }

    async fn delete_index(&self, event: &str) {
        self.indexes.lock().expect("lock").remove(event);
        self.indexed_faces.lock().expect("lock").remove(event);
    }
}

/// In-memory `PhotoCatalog` keyed by full (prefixed) collection name, so
/// prefix handling is exercised the same way it is against MongoDB.
#[derive(Default)]
pub struct MemoryCatalog {
    pub collections: Mutex<HashMap<String, Vec<NewPhotoRecord>>>,
    pub connected: bool,
    pub fail_drop: bool,
    counter: AtomicUsize,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self {
            connected: true,
            ..Self::default()
        }
    }

    pub fn disconnected() -> Self {
        Self::default()
    }

    pub fn failing_drop() -> Self {
        Self {
            connected: true,
            fail_drop: true,
            ..Self::default()
        }
    }

    pub fn seed_collection(&self, raw_name: &str) {
        self.collections
            .lock()
            .expect("lock")
            .insert(raw_name.to_string(), Vec::new());
    }

    fn collection_name(event: &str) -> String {
        format!("{COLLECTION_PREFIX}{event}")
    }
}

#[async_trait]
impl PhotoCatalog for MemoryCatalog {
    async fn save_photo(
        &self,
        event: &str,
        record: NewPhotoRecord,
    ) -> Result<String, CatalogError> {
        let id = self.counter.fetch_add(1, Ordering::SeqCst);
        self.collections
            .lock()
            .expect("lock")
            .entry(Self::collection_name(event))
            .or_default()
            .push(record);
        Ok(format!("{id:024x}"))
    }

    async fn find_photos_by_faces(&self, event: &str, face_ids: &[String]) -> Vec<PhotoSummary> {
        let collections = self.collections.lock().expect("lock");
        let Some(records) = collections.get(&Self::collection_name(event)) else {
            return Vec::new();
        };
        records
            .iter()
            .filter(|record| record.face_ids.iter().any(|id| face_ids.contains(id)))
            .map(|record| PhotoSummary {
                url: record.url.clone(),
                caras: record.face_ids.len(),
                nombre: record.nombre_archivo.clone(),
            })
            .collect()
    }

    async fn list_events(&self) -> Result<Vec<String>, CatalogError> {
        Ok(self
            .collections
            .lock()
            .expect("lock")
            .keys()
            .filter_map(|name| name.strip_prefix(COLLECTION_PREFIX))
            .map(str::to_string)
            .collect())
    }

    async fn drop_event(&self, event: &str) -> Result<(), CatalogError> {
        if self.fail_drop {
            return Err(CatalogError::Mongo(mongodb::error::Error::custom(
                "colección bloqueada",
            )));
        }
        self.collections
            .lock()
            .expect("lock")
            .remove(&Self::collection_name(event));
        Ok(())
    }

    async fn check_connection(&self) -> bool {
        self.connected
    }
}

pub struct TestApp {
    pub app: Router,
    pub vision: Arc<StubVision>,
    pub catalog: Arc<MemoryCatalog>,
}

pub fn test_app(vision: StubVision, catalog: MemoryCatalog) -> TestApp {
    let vision = Arc::new(vision);
    let catalog = Arc::new(catalog);
    let context = ApiContext {
        vision: vision.clone(),
        catalog: catalog.clone(),
        settings: test_settings(),
    };
    TestApp {
        app: create_router(context),
        vision,
        catalog,
    }
}

pub fn test_settings() -> AppSettings {
    AppSettings {
        api: ApiSettings {
            host: "127.0.0.1".to_string(),
            port: 0,
            allowed_origins: vec!["http://localhost:5173".to_string()],
        },
        storage: StorageSettings {
            region: "test".to_string(),
            bucket: "test-bucket".to_string(),
        },
        catalog: CatalogSettings {
            database: "event_photos_test".to_string(),
        },
        vision: VisionSettings {
            face_match_threshold: 70.0,
            max_faces: 20,
        },
        logging: LoggingSettings {
            level: "info".to_string(),
        },
        secrets: SecretSettings {
            aws_access_key_id: "test".to_string(),
            aws_secret_access_key: "test".to_string(),
            mongo_url: "mongodb://localhost:27017".to_string(),
        },
    }
}

pub fn multipart_request(uri: &str, file_name: &str, bytes: &[u8]) -> Request<Body> {
    let boundary = "test-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; \
             filename=\"{file_name}\"\r\nContent-Type: image/jpeg\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .expect("request")
}

pub async fn read_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("json body")
}
