// src/api/mod.rs — Request/response side of the detection server.

pub mod http;
pub mod types;

use std::path::PathBuf;

use async_trait::async_trait;

use crate::infra::errors::DeckError;
pub use http::HttpDetectionApi;
pub use types::{Detection, FrameEvent, Snapshot, Stats, StatusReply, UploadReply};

/// An image ready to be posted as the multipart `file` field.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    /// Read `path`, refusing directories and files over `max_bytes`.
    pub async fn read_limited(path: &std::path::Path, max_bytes: u64) -> Result<Self, DeckError> {
        let meta = tokio::fs::metadata(path).await?;
        if !meta.is_file() {
            return Err(DeckError::Rejected(format!("Not a file: {}", path.display())));
        }
        if meta.len() > max_bytes {
            return Err(DeckError::Rejected(format!(
                "File too large: {} bytes (max {max_bytes})",
                meta.len()
            )));
        }
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".into());
        Ok(Self { file_name, bytes })
    }

    pub fn mime(&self) -> &'static str {
        let ext = self
            .file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "png" => "image/png",
            "bmp" => "image/bmp",
            _ => "image/jpeg",
        }
    }
}

#[async_trait]
pub trait DetectionApi: Send + Sync {
    /// `POST /start_webcam`
    async fn start_webcam(&self) -> Result<StatusReply, DeckError>;

    /// `POST /stop_webcam`
    async fn stop_webcam(&self) -> Result<StatusReply, DeckError>;

    /// `POST /clear_logs`
    async fn clear_logs(&self) -> Result<StatusReply, DeckError>;

    /// `POST /upload_file`
    async fn upload_file(&self, file: UploadFile) -> Result<UploadReply, DeckError>;

    /// `GET /statistics`
    async fn statistics(&self) -> Result<Stats, DeckError>;

    /// `GET /get_logs`
    async fn logs(&self) -> Result<Vec<Detection>, DeckError>;
}

/// A request the controller wants sent. Produced by the controller,
/// executed by whoever owns the network side.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    Start,
    Stop,
    Clear,
    Upload { path: PathBuf, max_bytes: u64 },
    Refresh,
}

/// Outcome of an [`ApiCall`], fed back into the controller.
#[derive(Debug)]
pub enum ApiReply {
    Start(Result<StatusReply, DeckError>),
    Stop(Result<StatusReply, DeckError>),
    Clear(Result<StatusReply, DeckError>),
    Upload(Result<UploadReply, DeckError>),
    Refresh(Result<Snapshot, DeckError>),
}

impl ApiReply {
    /// The failure this reply carries, if the call did not succeed.
    pub fn error(&self) -> Option<&DeckError> {
        match self {
            ApiReply::Start(r) | ApiReply::Stop(r) | ApiReply::Clear(r) => r.as_ref().err(),
            ApiReply::Upload(r) => r.as_ref().err(),
            ApiReply::Refresh(r) => r.as_ref().err(),
        }
    }
}

/// Run one call against the backend.
pub async fn execute(api: &dyn DetectionApi, call: ApiCall) -> ApiReply {
    match call {
        ApiCall::Start => ApiReply::Start(api.start_webcam().await),
        ApiCall::Stop => ApiReply::Stop(api.stop_webcam().await),
        ApiCall::Clear => ApiReply::Clear(api.clear_logs().await),
        ApiCall::Upload { path, max_bytes } => {
            let result = match UploadFile::read_limited(&path, max_bytes).await {
                Ok(file) => api.upload_file(file).await,
                Err(e) => Err(e),
            };
            ApiReply::Upload(result)
        }
        ApiCall::Refresh => {
            let result = async {
                let stats = api.statistics().await?;
                let logs = api.logs().await?;
                Ok(Snapshot { stats, logs })
            }
            .await;
            ApiReply::Refresh(result)
        }
    }
}
