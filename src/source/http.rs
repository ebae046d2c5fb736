use std::time::Duration;

use anyhow::{Context, Result, bail};
use reqwest::blocking::Client;
use tracing::debug;

use super::DocumentSource;
use crate::utils::ensure_within_document_limit;

const USER_AGENT: &str = concat!("movie-log/", env!("CARGO_PKG_VERSION"));

/// Movie log served over HTTP(S), fetched with a single GET
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, url: url.into() })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl DocumentSource for HttpSource {
    fn fetch(&self) -> Result<String> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .with_context(|| format!("Failed to fetch movie log from {}", self.url))?;

        let status = response.status();
        if !status.is_success() {
            bail!("Failed to fetch movie log from {}: HTTP {}", self.url, status);
        }

        if let Some(length) = response.content_length() {
            ensure_within_document_limit(length, &self.url)?;
        }

        let bytes = response
            .bytes()
            .with_context(|| format!("Failed to read response body from {}", self.url))?;
        ensure_within_document_limit(bytes.len() as u64, &self.url)?;
        debug!(url = %self.url, %status, bytes = bytes.len(), "fetched movie log");

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
