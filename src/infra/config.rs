// src/infra/config.rs — Configuration loading (TOML)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::infra::errors::DeckError;
use crate::infra::paths;

/// Environment variable overriding `server.base_url`.
pub const SERVER_ENV: &str = "VISIONDECK_SERVER";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub channel: ChannelConfig,

    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub upload: UploadConfig,

    #[serde(default)]
    pub capture: CaptureConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub base_url: String,
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".into(),
            request_timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelConfig {
    /// Socket.IO mount path on the server.
    pub path: String,
    pub reconnect_delay_ms: u64,
    /// Capacity of the frame queue between the socket task and the UI loop.
    pub event_buffer: usize,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            path: "/socket.io/".into(),
            reconnect_delay_ms: 2_000,
            event_buffer: 32,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    pub notification_ttl_ms: u64,
    pub tick_ms: u64,
    /// Render the live frame as half-block pixels. Off falls back to a
    /// text summary of the frame.
    pub render_frames: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            notification_ttl_ms: 3_000,
            tick_ms: 1_000,
            render_frames: true,
        }
    }
}

impl UiConfig {
    pub fn notification_ttl(&self) -> Duration {
        Duration::from_millis(self.notification_ttl_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    pub max_bytes: u64,
    pub allowed_extensions: Vec<String>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_bytes: 10 * 1024 * 1024,
            allowed_extensions: ["jpg", "jpeg", "png", "bmp"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// Where captured frames are written (defaults to the data dir).
    pub dir: Option<PathBuf>,
}

impl CaptureConfig {
    pub fn resolved_dir(&self) -> PathBuf {
        self.dir.clone().unwrap_or_else(paths::captures_dir)
    }
}

impl Config {
    /// Load config from file, falling back to defaults.
    pub fn load() -> Result<Self, DeckError> {
        let path = paths::config_file_path();
        let mut config = if path.exists() {
            Self::load_from(&path)?
        } else {
            Self::default()
        };
        config.apply_env();
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self, DeckError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| DeckError::Config(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment overrides on top of file values.
    pub fn apply_env(&mut self) {
        if let Ok(url) = std::env::var(SERVER_ENV) {
            if !url.trim().is_empty() {
                self.server.base_url = url.trim().to_string();
            }
        }
    }

    pub fn validate(&self) -> Result<(), DeckError> {
        url::Url::parse(&self.server.base_url)
            .map_err(|e| DeckError::Config(format!("server.base_url: {e}")))?;
        if self.channel.event_buffer == 0 {
            return Err(DeckError::Config("channel.event_buffer must be > 0".into()));
        }
        if self.ui.tick_ms == 0 {
            return Err(DeckError::Config("ui.tick_ms must be > 0".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_reasonable() {
        let c = Config::default();
        assert_eq!(c.server.base_url, "http://localhost:3000");
        assert_eq!(c.ui.notification_ttl_ms, 3_000);
        assert_eq!(c.ui.tick_ms, 1_000);
        assert_eq!(c.upload.max_bytes, 10 * 1024 * 1024);
        assert_eq!(c.upload.allowed_extensions.len(), 4);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let c: Config = toml::from_str(
            r#"
[server]
base_url = "http://10.0.0.5:3000"
request_timeout_secs = 5
"#,
        )
        .unwrap();
        assert_eq!(c.server.base_url, "http://10.0.0.5:3000");
        assert_eq!(c.server.request_timeout_secs, 5);
        assert_eq!(c.channel.reconnect_delay_ms, 2_000);
        assert!(c.ui.render_frames);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[ui]\nnotification_ttl_ms = 500\ntick_ms = 250\nrender_frames = false\n",
        )
        .unwrap();
        let c = Config::load_from(&path).unwrap();
        assert_eq!(c.ui.notification_ttl(), Duration::from_millis(500));
        assert!(!c.ui.render_frames);
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let mut c = Config::default();
        c.server.base_url = "not a url".into();
        assert!(matches!(c.validate(), Err(DeckError::Config(_))));
    }

    #[test]
    fn test_zero_buffer_rejected() {
        let mut c = Config::default();
        c.channel.event_buffer = 0;
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_capture_dir_override() {
        let c = CaptureConfig {
            dir: Some(PathBuf::from("/tmp/frames")),
        };
        assert_eq!(c.resolved_dir(), PathBuf::from("/tmp/frames"));
    }
}
