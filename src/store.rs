use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::model::{DocumentRevisions, ServerConfig, Tombstone};

mod types;
pub use self::types::*;
mod databases;
mod documents;

#[derive(Debug, Error)]
pub enum StoreError {
    /// A structured failure reported by the server.
    #[error("{status}: {description}")]
    Remote { status: u16, description: String },
    /// The request never completed, or its body could not be decoded.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::Remote { status: 404, .. })
    }
}

pub struct StoreClient {
    config: ServerConfig,
    client: reqwest::blocking::Client,
}

impl StoreClient {
    pub fn new(config: &ServerConfig) -> Result<Self, StoreError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent("couchfs")
            .build()?;
        Ok(Self {
            config: config.clone(),
            client,
        })
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    fn ensure_ok(
        &self,
        resp: reqwest::blocking::Response,
    ) -> Result<reqwest::blocking::Response, StoreError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let description = match resp.json::<ErrorBody>() {
            Ok(body) => body.describe(status),
            Err(_) => status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string(),
        };
        Err(StoreError::Remote {
            status: status.as_u16(),
            description,
        })
    }
}
