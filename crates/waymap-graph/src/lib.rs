//! Weighted route graph built from a graph document.
//!
//! Edge weights are the Euclidean distance between the endpoints'
//! (lon, lat) coordinates.

use std::collections::HashMap;

use petgraph::graph::{NodeIndex, UnGraph};
use waymap_model::{GraphDocument, Node};

/// Undirected weighted graph over the nodes of a [`GraphDocument`].
pub struct RouteGraph {
    graph: UnGraph<Node, f64>,
    indices: HashMap<String, NodeIndex>,
}

impl RouteGraph {
    /// Build the graph from a document: one graph node per document node,
    /// one undirected edge per neighbor reference. A neighbor id that does
    /// not resolve to a node is skipped, and mutual references produce a
    /// single edge.
    pub fn from_document(doc: &GraphDocument) -> Self {
        let mut graph = UnGraph::new_undirected();
        let mut indices: HashMap<String, NodeIndex> = HashMap::new();

        for node in &doc.nodes {
            let idx = graph.add_node(node.clone());
            indices.insert(node.id.clone(), idx);
        }

        for node in &doc.nodes {
            let from = indices[&node.id];
            for neighbor_id in &node.neighbors {
                let Some(&to) = indices.get(neighbor_id) else {
                    continue;
                };
                if graph.find_edge(from, to).is_some() {
                    continue;
                }
                let other = &graph[to];
                let dx = node.lon - other.lon;
                let dy = node.lat - other.lat;
                let weight = (dx * dx + dy * dy).sqrt();
                graph.add_edge(from, to, weight);
            }
        }

        Self { graph, indices }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.indices.get(id).map(|&idx| &self.graph[idx])
    }

    /// Weight of the edge between two node ids, if both exist and are
    /// connected.
    pub fn edge_weight(&self, a: &str, b: &str) -> Option<f64> {
        let &ia = self.indices.get(a)?;
        let &ib = self.indices.get(b)?;
        let edge = self.graph.find_edge(ia, ib)?;
        self.graph.edge_weight(edge).copied()
    }
}
