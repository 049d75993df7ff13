//! # nodeview Client
//!
//! reqwest-backed [`ResourceClient`] for graph store REST resources.

use nodeview_core::{Error, ResourceClient, Result};
use reqwest::header::ACCEPT;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Whole-request timeout, connect included.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// GETs resources and decodes their JSON bodies.
#[derive(Debug, Clone)]
pub struct HttpResourceClient {
    http: reqwest::Client,
}

impl HttpResourceClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::InvalidConfig(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { http })
    }
}

impl ResourceClient for HttpResourceClient {
    async fn fetch(&self, url: &str) -> Result<Value> {
        debug!("GET {}", url);
        let response = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| Error::FetchFailure {
                url: url.to_string(),
                status: describe(&e),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::FetchFailure {
                url: url.to_string(),
                status: status.to_string(),
            });
        }

        let bytes = response.bytes().await.map_err(|e| Error::FetchFailure {
            url: url.to_string(),
            status: describe(&e),
        })?;

        serde_json::from_slice(&bytes).map_err(|e| Error::MalformedResponse {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}

/// Short status text for a transport error.
fn describe(error: &reqwest::Error) -> String {
    if error.is_timeout() {
        "timeout".to_string()
    } else if error.is_connect() {
        "connection failed".to_string()
    } else if error.is_builder() {
        "invalid url".to_string()
    } else {
        error.to_string()
    }
}
