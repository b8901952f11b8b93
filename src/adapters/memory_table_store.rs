use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::{AppError, Table};
use crate::ports::TableSource;

/// In-memory table source for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryTableStore {
    // Shared so clones observe each other's writes
    tables: Arc<Mutex<HashMap<PathBuf, Table>>>,
}

impl MemoryTableStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, path: impl Into<PathBuf>, table: Table) {
        self.lock().insert(path.into(), table);
    }

    pub fn get(&self, path: &Path) -> Option<Table> {
        self.lock().get(path).cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<PathBuf, Table>> {
        // Inserts replace whole tables, so a poisoned map is still consistent.
        self.tables.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl TableSource for MemoryTableStore {
    fn read_table(&self, path: &Path) -> Result<Table, AppError> {
        self.get(path).ok_or_else(|| {
            AppError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no table at {}", path.display()),
            ))
        })
    }

    fn write_table(&self, path: &Path, table: &Table) -> Result<(), AppError> {
        self.insert(path, table.clone());
        Ok(())
    }
}
