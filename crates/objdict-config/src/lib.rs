//! # objdict-config
//!
//! Layered configuration loading using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`OBJDICT_*` prefix, `__` as separator)
//! 2. Project-level `.objdict/config.toml`
//! 3. User-level `~/.config/objdict/config.toml`
//! 4. Built-in defaults
//!
//! `OBJDICT_STORE__PATH` maps to `store.path`, `OBJDICT_CODEGEN__LINE_ENDING`
//! to `codegen.line_ending`, and so on.
//!
//! ```no_run
//! use objdict_config::ObjDictConfig;
//!
//! let config = ObjDictConfig::load_with_dotenv().expect("config");
//! println!("database: {}", config.store.path.display());
//! ```

mod codegen;
mod error;
mod store;

pub use codegen::CodegenConfig;
pub use error::ConfigError;
pub use store::StoreConfig;

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Project-local config file, relative to the working directory.
pub const PROJECT_CONFIG_PATH: &str = ".objdict/config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ObjDictConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub codegen: CodegenConfig,
}

impl ObjDictConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does not read `.env`; see [`Self::load_with_dotenv`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be parsed or a value is out
    /// of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load `.env` from the working directory first, then [`Self::load`].
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate from an arbitrary provider chain.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// The default provider chain.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path().filter(|p| p.exists()) {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = Path::new(PROJECT_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("OBJDICT_").split("__"))
    }

    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for the first out-of-range value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.codegen.validate()
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("objdict").join("config.toml"))
    }
}
