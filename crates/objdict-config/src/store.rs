//! Database location.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_path() -> PathBuf {
    PathBuf::from(".objdict").join("objdict.duckdb")
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StoreConfig {
    /// `DuckDB` file holding models, fields and users. Relative paths resolve
    /// against the working directory.
    #[serde(default = "default_path")]
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_is_project_local() {
        assert_eq!(
            StoreConfig::default().path,
            PathBuf::from(".objdict/objdict.duckdb")
        );
    }
}
