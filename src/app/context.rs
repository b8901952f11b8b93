use std::path::{Path, PathBuf};

use crate::domain::{MetaConfig, TimeFormat};
use crate::ports::TableSource;

/// Application context holding dependencies for command execution.
pub struct AppContext<S: TableSource> {
    source: S,
    config: MetaConfig,
    root: PathBuf,
}

impl<S: TableSource> AppContext<S> {
    /// Create a new application context for the snapshot at `root`.
    pub fn new(source: S, config: MetaConfig, root: impl Into<PathBuf>) -> Self {
        Self { source, config, root: root.into() }
    }

    /// Get a reference to the table source.
    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn config(&self) -> &MetaConfig {
        &self.config
    }

    pub fn format(&self) -> &TimeFormat {
        &self.config.datetime_format
    }

    /// Snapshot root that configured table paths are relative to.
    pub fn root(&self) -> &Path {
        &self.root
    }
}
