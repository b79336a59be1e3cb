use super::PropertyMap;
use serde::Serialize;

/// Separator between parent and child ids in an edge id.
///
/// `>` is not a valid device tree node-name character.
pub const EDGE_ID_SEPARATOR: &str = "->";

/// Node element: one graph node per device tree node
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeElement {
    pub id: String,
    #[serde(rename = "name")]
    pub display_name: String,
    #[serde(rename = "compatible")]
    pub compatible_string: String,
    pub properties: PropertyMap,
    #[serde(rename = "size")]
    pub child_count: usize,
    #[serde(rename = "score")]
    pub weight: u32,
}

/// Edge element: one graph edge per parent-child relationship
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeElement {
    pub id: String,
    #[serde(rename = "source")]
    pub source_id: String,
    #[serde(rename = "target")]
    pub target_id: String,
}

impl EdgeElement {
    pub fn between(source_id: &str, target_id: &str) -> Self {
        Self {
            id: format!("{}{}{}", source_id, EDGE_ID_SEPARATOR, target_id),
            source_id: source_id.to_string(),
            target_id: target_id.to_string(),
        }
    }

    pub fn touches(&self, node_id: &str) -> bool {
        self.source_id == node_id || self.target_id == node_id
    }
}

/// GraphElement handed to the graph renderer
///
/// Serialized in the renderer's element shape:
/// `{"group": "nodes", "data": {...}}` / `{"group": "edges", "data": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "group", content = "data")]
pub enum GraphElement {
    #[serde(rename = "nodes")]
    Node(NodeElement),
    #[serde(rename = "edges")]
    Edge(EdgeElement),
}

impl GraphElement {
    pub fn id(&self) -> &str {
        match self {
            GraphElement::Node(node) => &node.id,
            GraphElement::Edge(edge) => &edge.id,
        }
    }

    pub fn as_node(&self) -> Option<&NodeElement> {
        match self {
            GraphElement::Node(node) => Some(node),
            GraphElement::Edge(_) => None,
        }
    }

    pub fn as_edge(&self) -> Option<&EdgeElement> {
        match self {
            GraphElement::Edge(edge) => Some(edge),
            GraphElement::Node(_) => None,
        }
    }
}
