// src/core/upload.rs — Upload zone affordance and client-side file checks.

use std::path::{Path, PathBuf};

use crate::infra::config::UploadConfig;
use crate::infra::errors::DeckError;

/// Highlight state of the drop target. Purely visual: only `drop`
/// ever hands back a file to upload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadZone {
    highlighted: bool,
}

impl UploadZone {
    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    pub fn drag_over(&mut self) {
        self.highlighted = true;
    }

    pub fn drag_leave(&mut self) {
        self.highlighted = false;
    }

    /// Restore the border and take the first dropped path, if any.
    pub fn drop(&mut self, paths: &[PathBuf]) -> Option<PathBuf> {
        self.highlighted = false;
        paths.first().cloned()
    }
}

/// Reject file types the server would refuse. Size and existence are
/// checked when the file is read for sending.
pub fn validate_upload(path: &Path, config: &UploadConfig) -> Result<(), DeckError> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    if !config
        .allowed_extensions
        .iter()
        .any(|allowed| allowed.eq_ignore_ascii_case(&ext))
    {
        return Err(DeckError::Rejected(format!(
            "Unsupported file type: {}",
            path.display()
        )));
    }
    Ok(())
}

/// Turn pasted text into a path. Terminals paste a dragged file as its
/// path, sometimes quoted or with escaped spaces.
pub fn parse_dropped_path(text: &str) -> Option<PathBuf> {
    let trimmed = text.trim();
    let unquoted = trimmed
        .strip_prefix('\'')
        .and_then(|s| s.strip_suffix('\''))
        .or_else(|| trimmed.strip_prefix('"').and_then(|s| s.strip_suffix('"')))
        .unwrap_or(trimmed);
    let unquoted = unquoted.strip_prefix("file://").unwrap_or(unquoted);
    if unquoted.is_empty() {
        return None;
    }
    Some(PathBuf::from(unquoted.replace("\\ ", " ")))
}
