use crate::application::read_models::{GraphDocument, GraphMetadataView, GraphStats};
use crate::graph_projection::domain::{GraphElement, LayoutOptions, SelectionReport};
use crate::ports::outbound::GraphFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct CytoscapeDocument<'a> {
    metadata: Metadata<'a>,
    layout: &'a LayoutOptions,
    style: &'a serde_json::Value,
    elements: &'a [GraphElement],
    #[serde(skip_serializing_if = "Option::is_none")]
    selection: Option<&'a SelectionReport>,
}

#[derive(Debug, Serialize)]
struct Metadata<'a> {
    timestamp: &'a str,
    tool: Tool<'a>,
    source: &'a str,
    stats: &'a GraphStats,
}

#[derive(Debug, Serialize)]
struct Tool<'a> {
    name: &'a str,
    version: &'a str,
}

/// CytoscapeFormatter adapter producing the renderer hand-off document
///
/// The `elements`, `style` and `layout` keys can be fed to a Cytoscape
/// instance as they are.
pub struct CytoscapeFormatter;

impl CytoscapeFormatter {
    pub fn new() -> Self {
        Self
    }

    fn metadata<'a>(view: &'a GraphMetadataView, stats: &'a GraphStats) -> Metadata<'a> {
        Metadata {
            timestamp: &view.timestamp,
            tool: Tool {
                name: &view.tool_name,
                version: &view.tool_version,
            },
            source: &view.source,
            stats,
        }
    }
}

impl Default for CytoscapeFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphFormatter for CytoscapeFormatter {
    fn format(&self, document: &GraphDocument) -> Result<String> {
        let output = CytoscapeDocument {
            metadata: Self::metadata(&document.metadata, &document.stats),
            layout: &document.layout,
            style: &document.style,
            elements: &document.elements,
            selection: document.selection.as_ref(),
        };

        serde_json::to_string_pretty(&output)
            .map_err(|e| anyhow::anyhow!("Failed to serialize graph document: {}", e))
    }
}
