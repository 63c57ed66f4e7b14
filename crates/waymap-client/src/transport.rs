use anyhow::{Context, Result};
use async_trait::async_trait;
use waymap_model::GraphDocument;

use crate::config::ClientConfig;

/// Retrieval of the graph document, abstracted so callers and tests can
/// substitute their own source for the HTTP backend.
#[async_trait]
pub trait GraphTransport: Send + Sync {
    async fn fetch_document(&self) -> Result<GraphDocument>;
}

/// `GET`s the graph document over HTTP.
pub struct HttpTransport {
    url: String,
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            url: config.graph_url(),
            client,
        })
    }
}

#[async_trait]
impl GraphTransport for HttpTransport {
    async fn fetch_document(&self) -> Result<GraphDocument> {
        let res = self
            .client
            .get(&self.url)
            .send()
            .await
            .with_context(|| format!("failed to reach {}", self.url))?
            .error_for_status()
            .with_context(|| format!("graph request to {} rejected", self.url))?;
        let doc = res
            .json::<GraphDocument>()
            .await
            .context("failed to decode graph document body")?;
        Ok(doc)
    }
}
