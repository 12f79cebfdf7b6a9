// src/channel/mod.rs — Push side of the detection server: the realtime socket.

pub mod client;
pub mod packet;

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use url::Url;

use crate::api::types::FrameEvent;
use crate::infra::config::ChannelConfig;
use crate::infra::errors::DeckError;
use client::{Inbound, SocketClient};

#[derive(Debug, Clone, PartialEq)]
pub enum ChannelEvent {
    Connected,
    Disconnected,
    Frame(Box<FrameEvent>),
}

/// WebSocket endpoint for a server base URL: `http` becomes `ws`,
/// `https` becomes `wss`, and the Engine.IO query is appended.
pub fn endpoint(base_url: &str, path: &str) -> Result<Url, DeckError> {
    let mut url = Url::parse(base_url)
        .map_err(|e| DeckError::Config(format!("server url {base_url:?}: {e}")))?;
    let scheme = match url.scheme() {
        "http" | "ws" => "ws",
        "https" | "wss" => "wss",
        other => {
            return Err(DeckError::Config(format!(
                "unsupported scheme {other:?} in {base_url}"
            )))
        }
    };
    url.set_scheme(scheme)
        .map_err(|_| DeckError::Config(format!("cannot use {scheme} for {base_url}")))?;
    url.set_path(path);
    url.set_query(Some("EIO=4&transport=websocket"));
    Ok(url)
}

/// Keep a session open until the receiver goes away, reconnecting after
/// `reconnect_delay_ms` whenever it drops. Frames are dropped rather than
/// queued when the receiver falls behind.
pub async fn run(url: Url, config: ChannelConfig, tx: mpsc::Sender<ChannelEvent>) {
    let delay = Duration::from_millis(config.reconnect_delay_ms);
    loop {
        match SocketClient::connect(&url).await {
            Ok(mut client) => {
                let mut connected = false;
                let outcome = loop {
                    match client.next_inbound().await {
                        Ok(Inbound::Connected) => {
                            connected = true;
                            if tx.send(ChannelEvent::Connected).await.is_err() {
                                return;
                            }
                        }
                        Ok(Inbound::Frame(frame)) => {
                            match tx.try_send(ChannelEvent::Frame(frame)) {
                                Ok(()) => {}
                                Err(TrySendError::Full(_)) => {
                                    tracing::debug!("UI behind, dropping frame")
                                }
                                Err(TrySendError::Closed(_)) => return,
                            }
                        }
                        Err(e) => break e,
                    }
                };
                tracing::warn!("Realtime session ended: {outcome}");
                if connected && tx.send(ChannelEvent::Disconnected).await.is_err() {
                    return;
                }
            }
            Err(e) => tracing::warn!("Realtime connect failed: {e}"),
        }

        if tx.is_closed() {
            return;
        }
        tokio::time::sleep(delay).await;
    }
}

/// Spawn [`run`] with a bounded queue sized from config.
pub fn spawn(
    base_url: &str,
    config: &ChannelConfig,
) -> Result<(mpsc::Receiver<ChannelEvent>, tokio::task::JoinHandle<()>), DeckError> {
    let url = endpoint(base_url, &config.path)?;
    let (tx, rx) = mpsc::channel(config.event_buffer);
    tracing::info!("Realtime channel: {url}");
    let handle = tokio::spawn(run(url, config.clone(), tx));
    Ok((rx, handle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_http_to_ws() {
        let url = endpoint("http://localhost:3000", "/socket.io/").unwrap();
        assert_eq!(
            url.as_str(),
            "ws://localhost:3000/socket.io/?EIO=4&transport=websocket"
        );
    }

    #[test]
    fn test_endpoint_https_to_wss() {
        let url = endpoint("https://vision.example.com/", "/socket.io/").unwrap();
        assert_eq!(url.scheme(), "wss");
        assert_eq!(url.path(), "/socket.io/");
    }

    #[test]
    fn test_endpoint_rejects_other_schemes() {
        assert!(endpoint("ftp://host", "/socket.io/").is_err());
        assert!(endpoint("not a url", "/socket.io/").is_err());
    }
}
