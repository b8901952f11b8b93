//! Snapshot configuration loading from `meta.toml`.

use std::fs;
use std::path::Path;

use log::debug;

use crate::domain::{AppError, CONFIG_FILE, MetaConfig};

/// Read the snapshot configuration.
///
/// An explicit `path` must exist. Otherwise `root/meta.toml` is used when present and the
/// defaults when it is not.
pub fn load_meta_config(root: &Path, path: Option<&Path>) -> Result<MetaConfig, AppError> {
    let config_path = match path {
        Some(path) => {
            if !path.is_file() {
                return Err(AppError::config_error(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            path.to_path_buf()
        }
        None => {
            let candidate = root.join(CONFIG_FILE);
            if !candidate.is_file() {
                debug!("no {} under {}, using defaults", CONFIG_FILE, root.display());
                return Ok(MetaConfig::default());
            }
            candidate
        }
    };

    let content = fs::read_to_string(&config_path)?;
    let config = MetaConfig::parse_toml(&content)?;
    debug!("loaded configuration from {}", config_path.display());
    Ok(config)
}
