//! Graph document read model
//!
//! Aggregates everything a formatter renders in a query-friendly shape.

use crate::graph_projection::domain::{
    EdgeElement, GraphElement, LayoutOptions, NodeElement, SelectionReport,
};
use serde::Serialize;

/// Main read model handed to the formatters
#[derive(Debug, Clone)]
pub struct GraphDocument {
    pub metadata: GraphMetadataView,
    pub stats: GraphStats,
    pub layout: LayoutOptions,
    /// Renderer stylesheet, passed through unmodified
    pub style: serde_json::Value,
    /// Pre-order element sequence as produced by the projector
    pub elements: Vec<GraphElement>,
    pub selection: Option<SelectionReport>,
}

impl GraphDocument {
    pub fn nodes(&self) -> impl Iterator<Item = &NodeElement> {
        self.elements.iter().filter_map(GraphElement::as_node)
    }

    pub fn edges(&self) -> impl Iterator<Item = &EdgeElement> {
        self.elements.iter().filter_map(GraphElement::as_edge)
    }
}

/// View representation of the document metadata
#[derive(Debug, Clone, Serialize)]
pub struct GraphMetadataView {
    pub timestamp: String,
    pub tool_name: String,
    pub tool_version: String,
    /// Device tree path or URL
    pub source: String,
}

/// Summary statistics over the decoded tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub node_count: usize,
    pub edge_count: usize,
    pub leaf_count: usize,
    /// Edges on the longest root-to-leaf path
    pub max_depth: usize,
}
