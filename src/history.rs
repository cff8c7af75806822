//! Recent generations kept on local disk

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::Result;
use crate::models::Generation;

/// Entries kept after any write
pub const HISTORY_CAPACITY: usize = 10;

/// JSON-array file of generations, newest first.
///
/// There is a single writer per file; concurrent processes sharing a path
/// may lose each other's entries.
#[derive(Debug, Clone)]
pub struct GenerationHistory {
    path: PathBuf,
}

impl GenerationHistory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored entries. A missing file is an empty history; so is one that no
    /// longer parses, which is logged and left in place until the next write.
    pub fn load(&self) -> Result<Vec<Generation>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str::<Vec<Generation>>(&contents) {
            Ok(mut entries) => {
                entries.truncate(HISTORY_CAPACITY);
                Ok(entries)
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "ignoring unreadable history");
                Ok(Vec::new())
            }
        }
    }

    /// Prepend `generation` and drop anything past the capacity
    pub fn record(&self, generation: Generation) -> Result<Vec<Generation>> {
        let mut entries = self.load()?;
        entries.insert(0, generation);
        entries.truncate(HISTORY_CAPACITY);
        self.save(&entries)?;
        debug!(entries = entries.len(), "history updated");
        Ok(entries)
    }

    /// Remove every entry
    pub fn clear(&self) -> Result<()> {
        self.save(&[])
    }

    fn save(&self, entries: &[Generation]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Write to a sibling file and rename so readers never see a partial array
        let temp = self.path.with_extension("tmp");
        let mut f = File::create(&temp)?;
        let content = serde_json::to_string_pretty(entries)?;
        f.write_all(content.as_bytes())?;
        f.sync_all()?;
        fs::rename(temp, &self.path)?;
        Ok(())
    }
}
