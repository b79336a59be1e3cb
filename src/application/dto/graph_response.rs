use crate::graph_projection::domain::{
    DeviceTreeNode, GraphElement, GraphMetadata, LayoutOptions, SelectionReport,
};

/// GraphResponse - Internal response DTO from the graph generation use case
///
/// Carries everything the formatters need; the decoded tree is kept for
/// the summary statistics.
#[derive(Debug, Clone)]
pub struct GraphResponse {
    pub tree: DeviceTreeNode,
    pub elements: Vec<GraphElement>,
    /// Present only when node ids were selected
    pub selection: Option<SelectionReport>,
    /// Renderer stylesheet, passed through unmodified
    pub stylesheet: serde_json::Value,
    pub layout: LayoutOptions,
    pub metadata: GraphMetadata,
}
