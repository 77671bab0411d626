//! Configuration loader (file + env merge).

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use thiserror::Error;

use crate::schema::ShelfConfig;

/// Environment variable that overrides the database directory.
pub const DATABASE_PATH_ENV: &str = "DATABASE_PATH";

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to load or merge configuration.
    #[error("configuration error: {0}")]
    Load(#[from] Box<figment::Error>),
}

/// Builds the layered provider stack:
/// 1. Default values
/// 2. Config file (if given)
/// 3. Environment variables (`SHELF_` prefix, `_` nests keys)
/// 4. `DATABASE_PATH`, mapped onto `database.dir`
pub fn figment(config_path: Option<&str>) -> Figment {
    let mut figment = Figment::from(Serialized::defaults(ShelfConfig::default()));

    if let Some(path) = config_path {
        figment = figment.merge(Toml::file(path));
    }

    figment
        .merge(Env::prefixed("SHELF_").split("_"))
        .merge(
            Env::raw()
                .only(&[DATABASE_PATH_ENV])
                .map(|_| "database.dir".into()),
        )
}

/// Loads and validates the merged configuration.
pub fn load_config(config_path: Option<&str>) -> Result<ShelfConfig, ConfigError> {
    figment(config_path)
        .extract()
        .map_err(|e| ConfigError::Load(Box::new(e)))
}
