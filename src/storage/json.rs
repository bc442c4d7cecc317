//! JSON file-based persistence backend.
//!
//! This module provides the production [`PersistenceAdapter`]: a small versioned
//! JSON document holding both panes' records, written atomically
//! (write-to-temp + rename) so a crash never leaves a half-written file.

use crate::domain::error::{Result, SidepanesError};
use crate::domain::Side;
use crate::storage::backend::PersistenceAdapter;
use crate::storage::models::{PersistedPane, PersistedPanes};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Current on-disk format version.
const FORMAT_VERSION: u32 = 1;

/// JSON document format.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredDocument {
    /// Version of the document format for future migrations.
    version: u32,

    /// Unix timestamp of the last write.
    #[serde(default)]
    saved_at: Option<i64>,

    /// Records of both panes.
    #[serde(default)]
    panes: PersistedPanes,
}

impl Default for StoredDocument {
    fn default() -> Self {
        Self {
            version: FORMAT_VERSION,
            saved_at: None,
            panes: PersistedPanes::default(),
        }
    }
}

/// JSON file persistence backend.
///
/// The file is read on every [`load`](PersistenceAdapter::load) and rewritten in
/// full on every [`save`](PersistenceAdapter::save). A document that cannot be
/// parsed is reported by `load` and replaced by the next `save`.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "saved_at": 1767225600,
///   "panes": {
///     "left": { "open_state": "pinned", "width": 360 },
///     "right": { "open_state": "closed", "width": 320 }
///   }
/// }
/// ```
#[derive(Debug)]
pub struct JsonFilePersistence {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// Last document read or written, used as the base for partial saves.
    cached: Option<StoredDocument>,
}

impl JsonFilePersistence {
    /// Opens a JSON persistence file, creating parent directories.
    ///
    /// The file itself is not touched until the first load or save.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created.
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON persistence");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        Ok(Self {
            file_path,
            cached: None,
        })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn read_document(path: &Path) -> Result<Option<StoredDocument>> {
        if !path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(path)?;
        let document: StoredDocument = serde_json::from_str(&contents)
            .map_err(|e| SidepanesError::Persistence(format!("failed to parse JSON: {e}")))?;

        if document.version > FORMAT_VERSION {
            return Err(SidepanesError::Persistence(format!(
                "unsupported format version {}",
                document.version
            )));
        }

        tracing::debug!(
            version = document.version,
            saved_at = ?document.saved_at,
            "loaded persisted panes"
        );
        Ok(Some(document))
    }

    fn write_document(&self, document: &StoredDocument) -> Result<()> {
        let json = serde_json::to_string_pretty(document)
            .map_err(|e| SidepanesError::Persistence(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;
        Ok(())
    }
}

impl PersistenceAdapter for JsonFilePersistence {
    fn load(&self) -> Result<Option<PersistedPanes>> {
        let _span = tracing::debug_span!("json_load", path = ?self.file_path).entered();
        Ok(Self::read_document(&self.file_path)?
            .map(|document| document.panes)
            .filter(|panes| !panes.is_empty()))
    }

    fn save(&mut self, side: Side, pane: &PersistedPane) -> Result<()> {
        let _span = tracing::debug_span!("json_save", side = %side, width = pane.width).entered();

        let mut document = match self.cached.take() {
            Some(document) => document,
            None => Self::read_document(&self.file_path)
                .unwrap_or_else(|e| {
                    tracing::warn!(error = %e, "discarding unreadable persistence file");
                    None
                })
                .unwrap_or_default(),
        };

        document.version = FORMAT_VERSION;
        document.panes.set(side, *pane);
        document.saved_at = Some(chrono::Utc::now().timestamp());

        let written = self.write_document(&document);
        self.cached = Some(document);
        written?;

        tracing::debug!("pane state saved");
        Ok(())
    }
}
