// src/capture.rs — Saving the currently displayed frame to disk.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::infra::errors::DeckError;

/// Somewhere captured frames go.
pub trait FrameSink {
    fn save(&mut self, name: &str, jpeg: &[u8]) -> Result<PathBuf, DeckError>;
}

/// Writes each capture as a file in one directory, creating it on first use.
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl FrameSink for DirectorySink {
    fn save(&mut self, name: &str, jpeg: &[u8]) -> Result<PathBuf, DeckError> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(name);
        std::fs::write(&path, jpeg)?;
        tracing::info!("Captured frame to {}", path.display());
        Ok(path)
    }
}

/// `detection_2026-10-19T08-15-02.jpg`. Colons are replaced so the
/// name is valid on every filesystem.
pub fn capture_file_name(at: DateTime<Utc>) -> String {
    format!("detection_{}.jpg", at.format("%Y-%m-%dT%H-%M-%S"))
}
