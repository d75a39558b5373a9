//! Persistence mirror
//!
//! Serializes `{menu, orders}` as a single JSON blob after every mutation
//! and restores it on startup. No schema versioning, no migration, no
//! partial-write protection: an unreadable blob just means the built-in
//! defaults are used. The cart is session-only and never persisted.

use serde::{Deserialize, Serialize};
use shared::{MenuItem, Order};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

/// Fixed blob name under the data directory
pub const STATE_FILE: &str = "luna_state.json";

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The whole persisted shop state
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PersistedState {
    pub menu: Vec<MenuItem>,
    pub orders: Vec<Order>,
}

/// File-backed mirror of the shop state.
#[derive(Debug, Clone)]
pub struct Mirror {
    path: PathBuf,
}

impl Mirror {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Mirror at the fixed blob name under `dir`.
    pub fn at_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(STATE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the blob wholesale.
    pub fn save(&self, state: &PersistedState) -> Result<(), PersistError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let blob = serde_json::to_string(state)?;
        fs::write(&self.path, blob)?;
        Ok(())
    }

    /// Read the blob back; `None` when absent or unparseable.
    pub fn load(&self) -> Option<PersistedState> {
        let blob = match fs::read_to_string(&self.path) {
            Ok(blob) => blob,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "failed to read state blob, using defaults");
                return None;
            }
        };
        match serde_json::from_str(&blob) {
            Ok(state) => Some(state),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "malformed state blob, using defaults");
                None
            }
        }
    }
}
