// src/channel/packet.rs — Engine.IO v4 / Socket.IO v5 text packet codec.
//
// Engine.IO frames one packet per WebSocket text message: a single digit type
// followed by the payload. Socket.IO packets ride inside Engine.IO `message`
// packets as `<type>[/namespace,][ack id][json]`.

use serde::Deserialize;
use serde_json::Value;

use crate::infra::errors::DeckError;

/// Server parameters from the Engine.IO `open` packet.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Handshake {
    pub sid: String,
    #[serde(default)]
    pub upgrades: Vec<String>,
    #[serde(default = "default_ping_interval")]
    pub ping_interval: u64,
    #[serde(default = "default_ping_timeout")]
    pub ping_timeout: u64,
    #[serde(default)]
    pub max_payload: Option<u64>,
}

fn default_ping_interval() -> u64 {
    25_000
}

fn default_ping_timeout() -> u64 {
    20_000
}

impl Handshake {
    /// How long silence may last before the server is considered gone.
    pub fn liveness_ms(&self) -> u64 {
        self.ping_interval + self.ping_timeout
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EnginePacket {
    Open(Handshake),
    Close,
    Ping(String),
    Pong(String),
    Message(String),
    Upgrade,
    Noop,
}

impl EnginePacket {
    pub fn decode(text: &str) -> Result<Self, DeckError> {
        let mut chars = text.chars();
        let kind = chars
            .next()
            .ok_or_else(|| DeckError::Protocol("empty engine.io packet".into()))?;
        let payload = chars.as_str();
        match kind {
            '0' => {
                let handshake: Handshake = serde_json::from_str(payload)
                    .map_err(|e| DeckError::Protocol(format!("bad open packet: {e}")))?;
                Ok(EnginePacket::Open(handshake))
            }
            '1' => Ok(EnginePacket::Close),
            '2' => Ok(EnginePacket::Ping(payload.to_string())),
            '3' => Ok(EnginePacket::Pong(payload.to_string())),
            '4' => Ok(EnginePacket::Message(payload.to_string())),
            '5' => Ok(EnginePacket::Upgrade),
            '6' => Ok(EnginePacket::Noop),
            other => Err(DeckError::Protocol(format!(
                "unknown engine.io packet type {other:?}"
            ))),
        }
    }

    pub fn encode(&self) -> String {
        match self {
            EnginePacket::Open(_) => "0".into(),
            EnginePacket::Close => "1".into(),
            EnginePacket::Ping(p) => format!("2{p}"),
            EnginePacket::Pong(p) => format!("3{p}"),
            EnginePacket::Message(m) => format!("4{m}"),
            EnginePacket::Upgrade => "5".into(),
            EnginePacket::Noop => "6".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SocketPacket {
    Connect {
        namespace: String,
        data: Option<Value>,
    },
    Disconnect {
        namespace: String,
    },
    Event {
        namespace: String,
        name: String,
        data: Value,
        ack: Option<u64>,
    },
    Ack {
        namespace: String,
        id: u64,
    },
    ConnectError {
        namespace: String,
        message: String,
    },
}

impl SocketPacket {
    /// Connect to a namespace, as sent by the client right after `open`.
    pub fn connect(namespace: &str) -> Self {
        SocketPacket::Connect {
            namespace: namespace.to_string(),
            data: None,
        }
    }

    pub fn decode(text: &str) -> Result<Self, DeckError> {
        let mut chars = text.chars();
        let kind = chars
            .next()
            .ok_or_else(|| DeckError::Protocol("empty socket.io packet".into()))?;
        let mut rest = chars.as_str();

        if kind == '5' || kind == '6' {
            return Err(DeckError::Protocol(
                "binary socket.io packets are not supported".into(),
            ));
        }

        let mut namespace = "/".to_string();
        if rest.starts_with('/') {
            match rest.find(',') {
                Some(i) => {
                    namespace = rest[..i].to_string();
                    rest = &rest[i + 1..];
                }
                None => {
                    namespace = rest.to_string();
                    rest = "";
                }
            }
        }

        let digits = rest.chars().take_while(|c| c.is_ascii_digit()).count();
        let ack = if digits > 0 {
            rest[..digits].parse::<u64>().ok()
        } else {
            None
        };
        let body = &rest[digits..];
        let json = if body.is_empty() {
            None
        } else {
            Some(
                serde_json::from_str::<Value>(body)
                    .map_err(|e| DeckError::Protocol(format!("bad socket.io payload: {e}")))?,
            )
        };

        match kind {
            '0' => Ok(SocketPacket::Connect {
                namespace,
                data: json,
            }),
            '1' => Ok(SocketPacket::Disconnect { namespace }),
            '2' => {
                let mut items = match json {
                    Some(Value::Array(items)) if !items.is_empty() => items,
                    _ => {
                        return Err(DeckError::Protocol(
                            "event packet without [name, ...] array".into(),
                        ))
                    }
                };
                let name = match items.remove(0) {
                    Value::String(name) => name,
                    other => {
                        return Err(DeckError::Protocol(format!(
                            "event name is not a string: {other}"
                        )))
                    }
                };
                let data = if items.is_empty() {
                    Value::Null
                } else {
                    items.remove(0)
                };
                Ok(SocketPacket::Event {
                    namespace,
                    name,
                    data,
                    ack,
                })
            }
            '3' => Ok(SocketPacket::Ack {
                namespace,
                id: ack.unwrap_or_default(),
            }),
            '4' => {
                let message = match json {
                    Some(Value::Object(map)) => map
                        .get("message")
                        .and_then(Value::as_str)
                        .unwrap_or("connection refused")
                        .to_string(),
                    Some(Value::String(s)) => s,
                    _ => "connection refused".to_string(),
                };
                Ok(SocketPacket::ConnectError { namespace, message })
            }
            other => Err(DeckError::Protocol(format!(
                "unknown socket.io packet type {other:?}"
            ))),
        }
    }

    /// Encoded Socket.IO packet, ready to wrap in an Engine.IO message.
    pub fn encode(&self) -> String {
        fn ns_prefix(namespace: &str) -> String {
            if namespace == "/" {
                String::new()
            } else {
                format!("{namespace},")
            }
        }
        match self {
            SocketPacket::Connect { namespace, data } => match data {
                Some(d) => format!("0{}{}", ns_prefix(namespace), d),
                None => format!("0{}", ns_prefix(namespace)),
            },
            SocketPacket::Disconnect { namespace } => format!("1{}", ns_prefix(namespace)),
            SocketPacket::Event {
                namespace,
                name,
                data,
                ack,
            } => {
                let ack = ack.map(|a| a.to_string()).unwrap_or_default();
                let body = Value::Array(vec![Value::String(name.clone()), data.clone()]);
                format!("2{}{}{}", ns_prefix(namespace), ack, body)
            }
            SocketPacket::Ack { namespace, id } => format!("3{}{}[]", ns_prefix(namespace), id),
            SocketPacket::ConnectError { namespace, message } => {
                format!(
                    "4{}{}",
                    ns_prefix(namespace),
                    serde_json::json!({ "message": message })
                )
            }
        }
    }
}
