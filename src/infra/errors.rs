// src/infra/errors.rs — Error types for VisionDeck

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckError {
    // Transport errors (request never produced a usable response)
    #[error("Request to '{endpoint}' failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to '{endpoint}' failed: HTTP {status}")]
    Status { endpoint: String, status: u16 },

    #[error("Realtime channel error: {0}")]
    Channel(String),

    #[error("Protocol error: {0}")]
    Protocol(String),

    // Backend-reported errors (`{error}` payload, whatever the HTTP status)
    #[error("{0}")]
    Backend(String),

    // Client-side rejections
    #[error("Upload rejected: {0}")]
    Rejected(String),

    #[error("Frame decode error: {0}")]
    Decode(String),

    // Infra
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DeckError {
    pub fn transport(endpoint: &str, source: reqwest::Error) -> Self {
        DeckError::Transport {
            endpoint: endpoint.to_string(),
            source,
        }
    }

    /// True for failures of the network path itself, as opposed to a
    /// backend that answered with an error payload.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            DeckError::Transport { .. } | DeckError::Status { .. } | DeckError::Channel(_)
        )
    }
}

impl From<base64::DecodeError> for DeckError {
    fn from(e: base64::DecodeError) -> Self {
        DeckError::Decode(e.to_string())
    }
}

impl From<image::ImageError> for DeckError {
    fn from(e: image::ImageError) -> Self {
        DeckError::Decode(e.to_string())
    }
}
