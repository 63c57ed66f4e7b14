use tracing::{error, warn};
use waymap_model::{GraphDocument, Node};

use crate::config::ClientConfig;
use crate::transport::{GraphTransport, HttpTransport};

/// Client over the graph document.
///
/// Every operation hits the transport afresh; concurrent callers each pay
/// their own round trip. A transport failure is logged here and reported to
/// the caller only as `None`. Callers cannot distinguish "unavailable" from
/// "legitimately empty".
pub struct GraphClient {
    transport: Box<dyn GraphTransport>,
}

impl GraphClient {
    /// Client backed by an HTTP transport built from `config`.
    pub fn over_http(config: &ClientConfig) -> anyhow::Result<Self> {
        Ok(Self {
            transport: Box::new(HttpTransport::new(config)?),
        })
    }

    /// Client over an arbitrary transport.
    pub fn with_transport(transport: Box<dyn GraphTransport>) -> Self {
        Self { transport }
    }

    /// Fetch the whole graph document. `None` means unavailable, whatever
    /// the cause.
    pub async fn fetch_graph(&self) -> Option<GraphDocument> {
        match self.transport.fetch_document().await {
            Ok(doc) => Some(doc),
            Err(e) => {
                error!("Failed to fetch graph data: {:#}", e);
                None
            }
        }
    }

    /// Look up a node by id, fetching the document first. An unavailable
    /// document is logged; an id with no matching node is an ordinary
    /// `None`.
    pub async fn lookup_node(&self, node_id: &str) -> Option<Node> {
        let Some(doc) = self.fetch_graph().await else {
            warn!("Graph data unavailable, cannot look up node '{}'", node_id);
            return None;
        };
        doc.node_by_id(node_id).cloned()
    }
}
