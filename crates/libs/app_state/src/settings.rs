use crate::{
    CatalogSettings, LoggingSettings, RawApiSettings, RawSettings, SecretSettings,
    StorageSettings, VisionSettings, DEFAULT_PORT,
};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub api: ApiSettings,
    pub storage: StorageSettings,
    pub catalog: CatalogSettings,
    pub vision: VisionSettings,
    pub logging: LoggingSettings,
    pub secrets: SecretSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    pub host: String,
    pub port: u32,
    pub allowed_origins: Vec<String>,
}

impl From<RawSettings> for AppSettings {
    fn from(raw: RawSettings) -> Self {
        let RawApiSettings {
            host,
            port,
            allowed_origins,
        } = raw.api;

        Self {
            api: ApiSettings {
                host,
                port: port.unwrap_or(DEFAULT_PORT),
                allowed_origins,
            },
            storage: raw.storage,
            catalog: raw.catalog,
            vision: raw.vision,
            logging: raw.logging,
            secrets: raw.secrets,
        }
    }
}
