use super::{EdgeElement, NodeElement};
use serde::Serialize;

/// SelectionReport: what the inspector shows for a set of selected nodes
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SelectionReport {
    pub nodes: Vec<NodeElement>,
    pub edges: Vec<EdgeElement>,
    /// Requested ids that matched no node, in request order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unmatched: Vec<String>,
}

impl SelectionReport {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}
