// src/infra/paths.rs — XDG-compliant path management
//
// All paths respect the VISIONDECK_HOME environment variable for isolation.
// When VISIONDECK_HOME is set, config and data live under that directory.
// When unset, config uses ~/.visiondeck/ and data uses XDG_DATA_HOME/visiondeck.

use directories::{BaseDirs, ProjectDirs};
use std::path::PathBuf;
use std::sync::OnceLock;

static PROJECT_DIRS: OnceLock<Option<ProjectDirs>> = OnceLock::new();

fn project_dirs() -> Option<&'static ProjectDirs> {
    PROJECT_DIRS
        .get_or_init(|| ProjectDirs::from("", "", "visiondeck"))
        .as_ref()
}

/// Returns the VISIONDECK_HOME override, if set.
fn visiondeck_home() -> Option<PathBuf> {
    std::env::var_os("VISIONDECK_HOME").map(PathBuf::from)
}

/// Home directory, or the current directory when no home can be determined.
pub fn dirs_home() -> PathBuf {
    BaseDirs::new()
        .map(|b| b.home_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Configuration directory: $VISIONDECK_HOME/ or ~/.visiondeck/
pub fn config_dir() -> PathBuf {
    if let Some(home) = visiondeck_home() {
        return home;
    }
    dirs_home().join(".visiondeck")
}

/// Data directory: $VISIONDECK_HOME/data/ or ~/.local/share/visiondeck/
pub fn data_dir() -> PathBuf {
    if let Some(home) = visiondeck_home() {
        return home.join("data");
    }
    match project_dirs() {
        Some(dirs) => dirs.data_local_dir().to_path_buf(),
        None => config_dir().join("data"),
    }
}

/// Config file path
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Default directory for captured frames
pub fn captures_dir() -> PathBuf {
    data_dir().join("captures")
}

/// Log file written while the TUI owns the terminal
pub fn log_file_path() -> PathBuf {
    data_dir().join("visiondeck.log")
}
