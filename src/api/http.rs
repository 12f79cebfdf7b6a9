// src/api/http.rs — reqwest-backed DetectionApi

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::types::{Detection, Stats, StatusReply, UploadReply};
use super::{DetectionApi, UploadFile};
use crate::infra::config::ServerConfig;
use crate::infra::errors::DeckError;

pub struct HttpDetectionApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpDetectionApi {
    pub fn new(config: &ServerConfig) -> Result<Self, DeckError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| DeckError::transport("client", e))?;
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, DeckError> {
        tracing::debug!("POST {path}");
        let resp = self
            .client
            .post(self.url(path))
            .send()
            .await
            .map_err(|e| DeckError::transport(path, e))?;
        read_reply(path, resp).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, DeckError> {
        tracing::debug!("GET {path}");
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| DeckError::transport(path, e))?;
        read_reply(path, resp).await
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Decode a reply body. A non-2xx reply still counts as an answer when it
/// carries `{"error": ...}`; anything else is a bare status failure.
async fn read_reply<T: DeserializeOwned>(
    path: &str,
    resp: reqwest::Response,
) -> Result<T, DeckError> {
    let status = resp.status();
    if status.is_success() {
        return resp
            .json::<T>()
            .await
            .map_err(|e| DeckError::transport(path, e));
    }
    let body = resp
        .text()
        .await
        .map_err(|e| DeckError::transport(path, e))?;
    match serde_json::from_str::<ErrorBody>(&body) {
        Ok(ErrorBody { error }) => {
            tracing::debug!("{path} answered {status} with error payload");
            Err(DeckError::Backend(error))
        }
        Err(_) => Err(DeckError::Status {
            endpoint: path.to_string(),
            status: status.as_u16(),
        }),
    }
}

#[async_trait]
impl DetectionApi for HttpDetectionApi {
    async fn start_webcam(&self) -> Result<StatusReply, DeckError> {
        self.post_json("/start_webcam").await
    }

    async fn stop_webcam(&self) -> Result<StatusReply, DeckError> {
        self.post_json("/stop_webcam").await
    }

    async fn clear_logs(&self) -> Result<StatusReply, DeckError> {
        self.post_json("/clear_logs").await
    }

    async fn upload_file(&self, file: UploadFile) -> Result<UploadReply, DeckError> {
        const PATH: &str = "/upload_file";
        tracing::debug!("POST {PATH} ({}, {} bytes)", file.file_name, file.bytes.len());

        let mime = file.mime();
        let part = Part::bytes(file.bytes)
            .file_name(file.file_name)
            .mime_str(mime)
            .map_err(|e| DeckError::transport(PATH, e))?;
        let form = Form::new().part("file", part);

        let resp = self
            .client
            .post(self.url(PATH))
            .multipart(form)
            .send()
            .await
            .map_err(|e| DeckError::transport(PATH, e))?;
        match read_reply::<UploadReply>(PATH, resp).await {
            Err(DeckError::Backend(message)) => Ok(UploadReply {
                error: Some(message),
                ..UploadReply::default()
            }),
            other => other,
        }
    }

    async fn statistics(&self) -> Result<Stats, DeckError> {
        self.get_json("/statistics").await
    }

    async fn logs(&self) -> Result<Vec<Detection>, DeckError> {
        self.get_json("/get_logs").await
    }
}
