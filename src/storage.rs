//! Durable storage for the project collection.
//!
//! One TOML file holds the entire collection; it is rewritten after every
//! mutation. Corrupt contents are discarded in favor of a fresh
//! bootstrapped collection rather than surfacing an error: the worst case
//! for this tool is losing a broken file, not refusing to start.

use anyhow::{Context, Result};
use log::warn;
use std::fs;
use std::path::{Path, PathBuf};

use crate::model::ProjectList;

pub struct Storage {
    file_path: PathBuf,
}

impl Storage {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    /// Load the project collection from disk.
    ///
    /// A missing file yields a fresh bootstrapped collection, and an
    /// unparseable file is discarded for one (with a warning). Either
    /// way, and whenever the reserved projects had to be created, the
    /// resulting collection is written back immediately so the next load
    /// sees the same state. Only that write-back can fail.
    pub fn load(&self) -> Result<ProjectList> {
        let mut data = if self.file_path.exists() {
            let content = fs::read_to_string(&self.file_path)
                .with_context(|| format!("failed to read {}", self.file_path.display()))?;
            match toml::from_str(&content) {
                Ok(data) => data,
                Err(err) => {
                    warn!(
                        "discarding corrupt project data in {}: {}",
                        self.file_path.display(),
                        err
                    );
                    ProjectList::new()
                }
            }
        } else {
            ProjectList::new()
        };

        if data.ensure_reserved_projects() {
            self.save(&data)?;
        }
        Ok(data)
    }

    /// Write the whole collection to disk, replacing the previous state.
    pub fn save(&self, data: &ProjectList) -> Result<()> {
        let content =
            toml::to_string_pretty(data).context("failed to serialize project collection")?;
        fs::write(&self.file_path, content)
            .with_context(|| format!("failed to write {}", self.file_path.display()))?;
        Ok(())
    }
}
