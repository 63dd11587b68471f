use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct RawSettings {
    pub api: RawApiSettings,
    pub storage: StorageSettings,
    pub catalog: CatalogSettings,
    pub vision: VisionSettings,
    pub logging: LoggingSettings,
    pub secrets: SecretSettings,
}

/// Configuration for the API server.
#[derive(Debug, Deserialize, Clone)]
pub struct RawApiSettings {
    pub host: String,
    /// Listen port; falls back to 8000 when unset.
    pub port: Option<u32>,
    pub allowed_origins: Vec<String>,
}

/// Object storage location. The bucket must already exist; the service never
/// creates it.
#[derive(Debug, Deserialize, Clone)]
pub struct StorageSettings {
    pub region: String,
    pub bucket: String,
}

/// Document store configuration. The connection URL lives in `secrets`.
#[derive(Debug, Deserialize, Clone)]
pub struct CatalogSettings {
    pub database: String,
}

/// Face search tunables. Tradeoff between false positives and recall, and an
/// upper bound on response size.
#[derive(Debug, Deserialize, Clone)]
pub struct VisionSettings {
    pub face_match_threshold: f32,
    pub max_faces: i32,
}

/// Logging configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SecretSettings {
    pub aws_access_key_id: String,
    pub aws_secret_access_key: String,
    pub mongo_url: String,
}
