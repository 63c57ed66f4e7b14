use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Where the graph document is served from and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the serving backend.
    pub base_url: String,
    /// Path of the graph document resource under the base URL.
    pub graph_path: String,
    /// Request timeout applied to every fetch.
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            graph_path: "/data/graph.json".to_string(),
            timeout_secs: 10,
        }
    }
}

impl ClientConfig {
    /// Load from a YAML file; keys absent from the file keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Full URL of the graph document resource.
    pub fn graph_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.graph_path)
    }
}
