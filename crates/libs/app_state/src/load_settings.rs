use crate::{AppSettings, RawSettings};
use color_eyre::eyre::Result;
use std::path::Path;

/// Loads the application settings from `config/settings.yaml`, layered with
/// `APP`-prefixed environment variables (`APP__SECRETS__MONGO_URL` and the
/// like). A local `.env` file is read first so secrets never need to live in
/// the YAML file.
pub fn load_app_settings() -> Result<AppSettings> {
    dotenv::from_path(".env").ok();
    let config_path = Path::new("config/settings.yaml").canonicalize()?;

    load_settings_from_path(&config_path)
}

pub fn load_settings_from_path(config_path: &Path) -> Result<AppSettings> {
    let builder = config::Config::builder()
        .add_source(config::File::from(config_path))
        .add_source(
            config::Environment::with_prefix("APP")
                .separator("__")
                .try_parsing(true),
        );

    let raw_settings = builder.build()?.try_deserialize::<RawSettings>()?;
    Ok(raw_settings.into())
}
