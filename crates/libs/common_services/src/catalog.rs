pub mod error;
pub mod records;
pub mod store;

pub use error::CatalogError;
pub use records::{NewPhotoRecord, PhotoSummary, StoredPhotoRecord};
pub use store::{event_collection_name, MongoCatalog, PhotoCatalog};
