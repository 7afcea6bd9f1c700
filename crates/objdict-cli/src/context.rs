use std::sync::Arc;

use anyhow::Context;
use objdict_config::ObjDictConfig;
use objdict_core::entities::{FieldRecord, ModelRecord, UserRecord};
use objdict_db::{ObjDictDb, Repository};
use objdict_service::ModelService;

use crate::cli::GlobalFlags;

pub type DbModelService = ModelService<
    Repository<ModelRecord>,
    Repository<ModelRecord>,
    Repository<FieldRecord>,
    Repository<UserRecord>,
>;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: ObjDictConfig,
    pub models: DbModelService,
    pub fields: Repository<FieldRecord>,
    pub users: Repository<UserRecord>,
}

impl AppContext {
    /// Open the database named by `--db` or `store.path` and wire the model
    /// service to it.
    pub fn init(config: ObjDictConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let path = flags.db.clone().unwrap_or_else(|| config.store.path.clone());
        let db = ObjDictDb::open_local(&path)
            .with_context(|| format!("failed to open database at {}", path.display()))?;
        Ok(Self::with_db(config, Arc::new(db)))
    }

    pub fn with_db(config: ObjDictConfig, db: Arc<ObjDictDb>) -> Self {
        let models = ModelService::new(
            db.repository(),
            db.repository(),
            db.repository(),
            db.repository(),
        )
        .with_generator(config.codegen.generator());

        Self {
            models,
            fields: db.repository(),
            users: db.repository(),
            config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    #[test]
    fn db_flag_overrides_configured_path() {
        let tmp = tempfile::TempDir::new().unwrap();
        let configured = tmp.path().join("configured.duckdb");
        let flagged = tmp.path().join("nested").join("flagged.duckdb");

        let mut config = ObjDictConfig::default();
        config.store.path.clone_from(&configured);
        let flags = GlobalFlags {
            format: OutputFormat::Json,
            quiet: false,
            verbose: false,
            db: Some(flagged.clone()),
        };

        AppContext::init(config, &flags).unwrap();
        assert!(flagged.exists());
        assert!(!configured.exists());
    }
}
