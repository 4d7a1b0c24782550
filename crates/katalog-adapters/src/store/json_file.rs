//! Local JSON-file product store.
//!
//! The file holds a single JSON array of product records. A missing file is
//! an empty catalog. A file that does not parse is logged, removed, and read
//! as empty; the next append starts a fresh array.

use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::Mutex,
};

use katalog_core::{
    application::{ApplicationError, ports::ProductStore},
    domain::Product,
    error::{KatalogError, KatalogResult},
};
use tracing::{debug, warn};

/// Product store backed by one JSON file on disk.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Create a store for `path`. Nothing is touched until the first access.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `Ok(None)` means the file exists but does not hold a product array.
    /// Read failures other than a missing file are returned as-is.
    fn read_records(&self) -> io::Result<Option<Vec<Product>>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Some(Vec::new())),
            Err(e) => return Err(e),
        };

        if raw.trim().is_empty() {
            return Ok(Some(Vec::new()));
        }

        match serde_json::from_str(&raw) {
            Ok(records) => Ok(Some(records)),
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Stored products are malformed, discarding them"
                );
                Ok(None)
            }
        }
    }

    fn clear(&self) {
        if let Err(e) = fs::remove_file(&self.path) {
            if e.kind() != io::ErrorKind::NotFound {
                warn!(path = %self.path.display(), error = %e, "Could not clear corrupt product store");
            }
        }
    }

    fn write_records(&self, records: &[Product]) -> KatalogResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| map_io_error(parent, e, "create directory"))?;
        }

        let json = serde_json::to_string_pretty(records).map_err(|e| {
            KatalogError::from(ApplicationError::SerializationFailed {
                reason: e.to_string(),
            })
        })?;

        // Write beside the target and rename so a crash never leaves half a file.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| map_io_error(&tmp, e, "write file"))?;
        fs::rename(&tmp, &self.path).map_err(|e| map_io_error(&self.path, e, "replace file"))
    }
}

impl ProductStore for JsonFileStore {
    fn load(&self) -> Vec<Product> {
        match self.read_records() {
            Ok(Some(records)) => {
                debug!(path = %self.path.display(), count = records.len(), "Products loaded");
                records
            }
            Ok(None) => {
                self.clear();
                Vec::new()
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Product store unreadable");
                Vec::new()
            }
        }
    }

    fn append(&self, record: Product) -> KatalogResult<()> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| ApplicationError::StoreLockError)?;

        // An unreadable file may still hold valid records; never write over it.
        let mut records = match self.read_records() {
            Ok(Some(records)) => records,
            Ok(None) => Vec::new(),
            Err(e) => return Err(map_io_error(&self.path, e, "read file")),
        };
        if records.iter().any(|p| p.product_id() == record.product_id()) {
            return Err(ApplicationError::DuplicateProduct {
                id: record.product_id().to_string(),
            }
            .into());
        }

        records.push(record);
        self.write_records(&records)?;
        debug!(path = %self.path.display(), count = records.len(), "Product appended");
        Ok(())
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> KatalogError {
    ApplicationError::PersistenceFailed {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
