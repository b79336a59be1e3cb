use crate::application::dto::{GraphRequest, GraphResponse};
use crate::graph_projection::domain::{
    DeviceTreeFormat, DeviceTreeNode, GraphElement, LayoutOptions, SelectionReport,
    SourceLocation,
};
use crate::graph_projection::services::{ElementInspector, MetadataGenerator, TreeProjector};
use crate::ports::outbound::{DeviceTreeDecoder, ProgressReporter, SourceReader};
use crate::shared::error::GraphError;
use crate::shared::Result;

/// Stylesheet used when the request names none
pub const DEFAULT_STYLESHEET: &str = include_str!("../../../../assets/default-style.json");

/// GenerateGraphUseCase - Core use case for device tree graph generation
///
/// Orchestrates loading, decoding and projecting a device tree, using
/// generic dependency injection for all infrastructure dependencies.
///
/// # Type Parameters
/// * `SR` - SourceReader implementation (device tree and stylesheet)
/// * `DTD` - DeviceTreeDecoder implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateGraphUseCase<SR, DTD, PR> {
    source_reader: SR,
    decoder: DTD,
    progress_reporter: PR,
}

impl<SR, DTD, PR> GenerateGraphUseCase<SR, DTD, PR>
where
    SR: SourceReader,
    DTD: DeviceTreeDecoder,
    PR: ProgressReporter,
{
    /// Creates a new GenerateGraphUseCase with injected dependencies
    pub fn new(source_reader: SR, decoder: DTD, progress_reporter: PR) -> Self {
        Self {
            source_reader,
            decoder,
            progress_reporter,
        }
    }

    /// Executes the graph generation use case
    ///
    /// # Errors
    /// Returns an error if the source has an unsupported extension, cannot
    /// be read or decoded, or if the stylesheet is not valid JSON
    pub fn execute(&self, request: GraphRequest) -> Result<GraphResponse> {
        // Step 1: Reject unsupported inputs before touching the source
        let format = DeviceTreeFormat::detect(&request.source)?;

        // Step 2: Read and decode the device tree
        let tree = self.load_device_tree(&request.source, format)?;

        // Step 3: Project the tree into graph elements
        let elements = self.project(&tree);

        // Step 4: Inspect selected nodes if requested
        let selection = self.inspect_selection(&elements, &request.selected_nodes);

        // Step 5: Load the renderer stylesheet
        let stylesheet = self.load_stylesheet(request.stylesheet.as_ref())?;

        // Step 6: Resolve the layout preset
        let layout = match request.layout {
            Some(name) => LayoutOptions::for_layout(name),
            None => LayoutOptions::initial(),
        };
        self.progress_reporter
            .report(&format!("📐 Using layout: {}", layout.name));

        // Step 7: Stamp metadata
        let metadata = MetadataGenerator::generate_default_metadata(&request.source.to_string());

        Ok(GraphResponse {
            tree,
            elements,
            selection,
            stylesheet,
            layout,
            metadata,
        })
    }

    fn load_device_tree(
        &self,
        source: &SourceLocation,
        format: DeviceTreeFormat,
    ) -> Result<DeviceTreeNode> {
        self.progress_reporter.report(&format!(
            "📖 Loading device tree ({}) from: {}",
            format, source
        ));

        let bytes = self.source_reader.read_source(source)?;
        let tree = self.decoder.decode(&bytes, format, source)?;

        self.progress_reporter
            .report(&format!("✅ Decoded {} node(s)", tree.node_count()));

        Ok(tree)
    }

    fn project(&self, tree: &DeviceTreeNode) -> Vec<GraphElement> {
        let elements = TreeProjector::project(tree);
        self.progress_reporter.report(&format!(
            "🔀 Projected {} node(s) and {} edge(s)",
            tree.node_count(),
            tree.edge_count()
        ));
        elements
    }

    fn inspect_selection(
        &self,
        elements: &[GraphElement],
        selected_nodes: &[String],
    ) -> Option<SelectionReport> {
        if selected_nodes.is_empty() {
            return None;
        }

        let report = ElementInspector::select(elements, selected_nodes);
        for id in &report.unmatched {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Selected node '{}' does not exist in the device tree.",
                id
            ));
        }
        self.progress_reporter.report(&format!(
            "🔍 Selected {} node(s) with {} connecting edge(s)",
            report.nodes.len(),
            report.edges.len()
        ));

        Some(report)
    }

    fn load_stylesheet(&self, location: Option<&SourceLocation>) -> Result<serde_json::Value> {
        let Some(location) = location else {
            return Self::parse_stylesheet(DEFAULT_STYLESHEET.as_bytes(), "bundled default");
        };

        self.progress_reporter
            .report(&format!("🎨 Loading stylesheet from: {}", location));

        let bytes = self
            .source_reader
            .read_source(location)
            .map_err(|e| GraphError::StylesheetError {
                location: location.to_string(),
                details: e.to_string(),
            })?;

        Self::parse_stylesheet(&bytes, &location.to_string())
    }

    fn parse_stylesheet(bytes: &[u8], location: &str) -> Result<serde_json::Value> {
        serde_json::from_slice(bytes).map_err(|e| {
            GraphError::StylesheetError {
                location: location.to_string(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
