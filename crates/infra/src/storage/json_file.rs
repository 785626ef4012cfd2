use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use stockroom_core::{DomainError, DomainResult};
use stockroom_inventory::{Product, ProductSlot};

/// File-backed slot: one JSON array holding the entire product list.
///
/// A missing or blank file loads as an empty slot. Saves go to a sibling
/// `.tmp` file that is then renamed over the target, so a crash mid-write
/// leaves the previous list intact.
#[derive(Debug, Clone)]
pub struct JsonFileSlot {
    path: PathBuf,
}

impl JsonFileSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "products.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl ProductSlot for JsonFileSlot {
    fn load(&self) -> DomainResult<Option<Vec<Product>>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "product file missing; starting empty");
                return Ok(None);
            }
            Err(e) => {
                return Err(DomainError::storage(format!(
                    "failed to read {}: {e}",
                    self.path.display()
                )));
            }
        };

        if raw.trim().is_empty() {
            return Ok(None);
        }

        let products: Vec<Product> = serde_json::from_str(&raw).map_err(|e| {
            DomainError::storage(format!("malformed product list in {}: {e}", self.path.display()))
        })?;
        Ok(Some(products))
    }

    fn save(&mut self, products: &[Product]) -> DomainResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                DomainError::storage(format!("failed to create {}: {e}", parent.display()))
            })?;
        }

        let json = serde_json::to_string_pretty(products)?;
        let staging = self.staging_path();
        fs::write(&staging, json).map_err(|e| {
            DomainError::storage(format!("failed to write {}: {e}", staging.display()))
        })?;
        fs::rename(&staging, &self.path).map_err(|e| {
            DomainError::storage(format!(
                "failed to move {} into place: {e}",
                self.path.display()
            ))
        })?;

        tracing::debug!(path = %self.path.display(), count = products.len(), "wrote product file");
        Ok(())
    }
}
