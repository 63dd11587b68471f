use super::error::CatalogError;
use super::records::{NewPhotoRecord, PhotoSummary, StoredPhotoRecord};
use app_state::{AppSettings, COLLECTION_PREFIX};
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};
use std::time::Duration;
use tracing::{debug, error, info};

const SERVER_SELECTION_TIMEOUT: Duration = Duration::from_secs(5);

/// Collection name for an event's photo records.
pub fn event_collection_name(event: &str) -> String {
    format!("{COLLECTION_PREFIX}{event}")
}

/// Persistence of per-photo metadata in event-scoped collections.
///
/// Implementations multiplex connections internally and are safe to share
/// across concurrent requests behind an `Arc`.
#[async_trait]
pub trait PhotoCatalog: Send + Sync {
    /// Inserts a photo record and returns the store-assigned identifier as
    /// an opaque hex string.
    async fn save_photo(&self, event: &str, record: NewPhotoRecord)
        -> Result<String, CatalogError>;

    /// Every photo whose `face_ids` intersects the given identifiers.
    ///
    /// Result order is unspecified (store iteration order); callers must not
    /// rely on it. Connectivity failures collapse to an empty list.
    async fn find_photos_by_faces(&self, event: &str, face_ids: &[String]) -> Vec<PhotoSummary>;

    /// All known event names, collection prefix stripped. Collections
    /// without the prefix belong to someone else and are never listed.
    async fn list_events(&self) -> Result<Vec<String>, CatalogError>;

    /// Drops the event's collection. Dropping a collection that does not
    /// exist is a successful no-op.
    async fn drop_event(&self, event: &str) -> Result<(), CatalogError>;

    /// Lightweight liveness probe; false rather than an error on any
    /// connectivity failure.
    async fn check_connection(&self) -> bool;
}

/// `PhotoCatalog` backed by MongoDB.
#[derive(Clone)]
pub struct MongoCatalog {
    client: Client,
    db: Database,
}

impl MongoCatalog {
    pub async fn connect(settings: &AppSettings) -> Result<Self, CatalogError> {
        let mut options = ClientOptions::parse(&settings.secrets.mongo_url).await?;
        options.server_selection_timeout = Some(SERVER_SELECTION_TIMEOUT);
        let client = Client::with_options(options)?;
        let db = client.database(&settings.catalog.database);
        info!("Connected catalog to database '{}'", db.name());
        Ok(Self { client, db })
    }

    fn write_collection(&self, event: &str) -> Collection<NewPhotoRecord> {
        self.db.collection(&event_collection_name(event))
    }

    fn read_collection(&self, event: &str) -> Collection<StoredPhotoRecord> {
        self.db.collection(&event_collection_name(event))
    }
}

#[async_trait]
impl PhotoCatalog for MongoCatalog {
    async fn save_photo(
        &self,
        event: &str,
        record: NewPhotoRecord,
    ) -> Result<String, CatalogError> {
        let result = self.write_collection(event).insert_one(&record).await?;
        let id = result
            .inserted_id
            .as_object_id()
            .ok_or(CatalogError::UnexpectedInsertId)?;
        Ok(id.to_hex())
    }

    async fn find_photos_by_faces(&self, event: &str, face_ids: &[String]) -> Vec<PhotoSummary> {
        let collection_name = event_collection_name(event);
        debug!("Querying '{collection_name}' by face-id membership");

        let filter = doc! { "face_ids": { "$in": face_ids.to_vec() } };
        let cursor = match self.read_collection(event).find(filter).await {
            Ok(cursor) => cursor,
            Err(err) => {
                error!("Face-id query on '{collection_name}' failed: {err}");
                return Vec::new();
            }
        };

        match cursor
            .map_ok(PhotoSummary::from)
            .try_collect::<Vec<_>>()
            .await
        {
            Ok(photos) => {
                debug!("Found {} matching photos in '{collection_name}'", photos.len());
                photos
            }
            Err(err) => {
                error!("Reading face-id query results from '{collection_name}' failed: {err}");
                Vec::new()
            }
        }
    }

    async fn list_events(&self) -> Result<Vec<String>, CatalogError> {
        let names = self.db.list_collection_names().await?;
        Ok(names
            .iter()
            .filter_map(|name| name.strip_prefix(COLLECTION_PREFIX))
            .map(str::to_string)
            .collect())
    }

    async fn drop_event(&self, event: &str) -> Result<(), CatalogError> {
        self.read_collection(event).drop().await?;
        Ok(())
    }

    async fn check_connection(&self) -> bool {
        match self
            .client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
        {
            Ok(_) => true,
            Err(err) => {
                error!("Document store ping failed: {err}");
                false
            }
        }
    }
}
