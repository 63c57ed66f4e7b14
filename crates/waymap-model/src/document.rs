use serde::{Deserialize, Serialize};

/// An entry in the graph document. Only `id` is required; every other field
/// falls back to its default when the serving side omits it, and unknown
/// fields in the document are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub dept: String,
    #[serde(default)]
    pub lon: f64,
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub neighbors: Vec<String>,
}

/// The graph document as served over HTTP: a flat list of nodes, each
/// referencing its neighbors by id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    pub nodes: Vec<Node>,
}

impl GraphDocument {
    /// First node with a matching id, if any.
    pub fn node_by_id(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }
}
