// src/channel/client.rs — Socket.IO client over a tokio-tungstenite WebSocket.

use std::time::Duration;

use futures::{SinkExt, StreamExt};
use tokio_tungstenite::tungstenite::Message;
use url::Url;

use super::packet::{EnginePacket, Handshake, SocketPacket};
use crate::api::types::FrameEvent;
use crate::infra::errors::DeckError;

/// Name of the realtime event carrying frames.
pub const FRAME_EVENT: &str = "video_frame";

type WsStream =
    tokio_tungstenite::WebSocketStream<tokio_tungstenite::MaybeTlsStream<tokio::net::TcpStream>>;

/// What the socket produced, after protocol chatter has been handled.
#[derive(Debug)]
pub enum Inbound {
    /// The namespace connect was acknowledged.
    Connected,
    Frame(Box<FrameEvent>),
}

/// One live Engine.IO session. Dropped on any error; the caller reconnects.
pub struct SocketClient {
    write: futures::stream::SplitSink<WsStream, Message>,
    read: futures::stream::SplitStream<WsStream>,
    handshake: Handshake,
}

impl SocketClient {
    /// Open the WebSocket, read the Engine.IO handshake and ask to join
    /// the default namespace.
    pub async fn connect(url: &Url) -> Result<Self, DeckError> {
        let (ws_stream, _) = tokio_tungstenite::connect_async(url.as_str())
            .await
            .map_err(|e| DeckError::Channel(format!("connect {url}: {e}")))?;
        let (write, mut read) = ws_stream.split();

        let handshake = loop {
            match read.next().await {
                None => return Err(DeckError::Channel("closed before handshake".into())),
                Some(Err(e)) => return Err(DeckError::Channel(format!("handshake: {e}"))),
                Some(Ok(Message::Text(text))) => match EnginePacket::decode(text.as_str())? {
                    EnginePacket::Open(h) => break h,
                    other => {
                        return Err(DeckError::Protocol(format!(
                            "expected open packet, got {other:?}"
                        )))
                    }
                },
                Some(Ok(_)) => {}
            }
        };
        tracing::debug!(
            "engine.io open: sid={} ping={}ms",
            handshake.sid,
            handshake.ping_interval
        );

        let mut client = Self {
            write,
            read,
            handshake,
        };
        client
            .send(EnginePacket::Message(SocketPacket::connect("/").encode()))
            .await?;
        Ok(client)
    }

    async fn send(&mut self, packet: EnginePacket) -> Result<(), DeckError> {
        self.write
            .send(Message::Text(packet.encode().into()))
            .await
            .map_err(|e| DeckError::Channel(format!("send: {e}")))
    }

    /// Next connect acknowledgement or frame. Answers pings along the way
    /// and skips events the dashboard has no use for.
    pub async fn next_inbound(&mut self) -> Result<Inbound, DeckError> {
        let liveness = Duration::from_millis(self.handshake.liveness_ms());
        loop {
            let msg = tokio::time::timeout(liveness, self.read.next())
                .await
                .map_err(|_| DeckError::Channel("ping timeout".into()))?;
            let text = match msg {
                None => return Err(DeckError::Channel("connection closed".into())),
                Some(Err(e)) => return Err(DeckError::Channel(format!("receive: {e}"))),
                Some(Ok(Message::Text(text))) => text,
                Some(Ok(Message::Close(_))) => {
                    return Err(DeckError::Channel("connection closed".into()))
                }
                Some(Ok(_)) => continue,
            };

            match EnginePacket::decode(text.as_str())? {
                EnginePacket::Ping(payload) => self.send(EnginePacket::Pong(payload)).await?,
                EnginePacket::Close => {
                    return Err(DeckError::Channel("server closed session".into()))
                }
                EnginePacket::Message(body) => {
                    if let Some(inbound) = self.on_socket_packet(&body)? {
                        return Ok(inbound);
                    }
                }
                EnginePacket::Open(_)
                | EnginePacket::Pong(_)
                | EnginePacket::Upgrade
                | EnginePacket::Noop => {}
            }
        }
    }

    fn on_socket_packet(&self, body: &str) -> Result<Option<Inbound>, DeckError> {
        let packet = match SocketPacket::decode(body) {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!("Skipping socket.io packet: {e}");
                return Ok(None);
            }
        };
        match packet {
            SocketPacket::Connect { .. } => Ok(Some(Inbound::Connected)),
            SocketPacket::Disconnect { .. } => {
                Err(DeckError::Channel("server disconnected namespace".into()))
            }
            SocketPacket::ConnectError { message, .. } => Err(DeckError::Channel(message)),
            SocketPacket::Event { name, data, .. } if name == FRAME_EVENT => {
                match serde_json::from_value::<FrameEvent>(data) {
                    Ok(frame) => Ok(Some(Inbound::Frame(Box::new(frame)))),
                    Err(e) => {
                        tracing::warn!("Ignoring malformed {FRAME_EVENT}: {e}");
                        Ok(None)
                    }
                }
            }
            SocketPacket::Event { name, .. } => {
                tracing::debug!("Ignoring event {name}");
                Ok(None)
            }
            SocketPacket::Ack { .. } => Ok(None),
        }
    }
}
