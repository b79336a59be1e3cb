//! Builder for constructing GraphDocument from the use case response

use super::graph_document::{GraphDocument, GraphMetadataView, GraphStats};
use crate::application::dto::GraphResponse;
use crate::graph_projection::domain::{DeviceTreeNode, GraphMetadata};

/// Builder for constructing GraphDocument from domain objects
pub struct GraphDocumentBuilder;

impl GraphDocumentBuilder {
    /// Consumes the response and builds the read model
    pub fn build(response: GraphResponse) -> GraphDocument {
        GraphDocument {
            metadata: Self::build_metadata(&response.metadata),
            stats: Self::build_stats(&response.tree),
            layout: response.layout,
            style: response.stylesheet,
            elements: response.elements,
            selection: response.selection,
        }
    }

    fn build_metadata(metadata: &GraphMetadata) -> GraphMetadataView {
        GraphMetadataView {
            timestamp: metadata.timestamp().to_string(),
            tool_name: metadata.tool_name().to_string(),
            tool_version: metadata.tool_version().to_string(),
            source: metadata.source().to_string(),
        }
    }

    fn build_stats(tree: &DeviceTreeNode) -> GraphStats {
        GraphStats {
            node_count: tree.node_count(),
            edge_count: tree.edge_count(),
            leaf_count: tree.leaf_count(),
            max_depth: tree.max_depth(),
        }
    }
}
