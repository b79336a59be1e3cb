use crate::graph_projection::domain::{LayoutName, SourceLocation};

/// GraphRequest - Internal request DTO for the graph generation use case
#[derive(Debug, Clone)]
pub struct GraphRequest {
    /// Device tree to visualize (file path or URL)
    pub source: SourceLocation,
    /// Optional stylesheet; the bundled default is used when absent
    pub stylesheet: Option<SourceLocation>,
    /// Layout the user switched to; the initial preset is used when absent
    pub layout: Option<LayoutName>,
    /// Node ids to inspect
    pub selected_nodes: Vec<String>,
}

impl GraphRequest {
    pub fn new(source: SourceLocation) -> Self {
        Self {
            source,
            stylesheet: None,
            layout: None,
            selected_nodes: Vec::new(),
        }
    }

    pub fn with_stylesheet(mut self, stylesheet: Option<SourceLocation>) -> Self {
        self.stylesheet = stylesheet;
        self
    }

    pub fn with_layout(mut self, layout: Option<LayoutName>) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_selected_nodes(mut self, selected_nodes: Vec<String>) -> Self {
        self.selected_nodes = selected_nodes;
        self
    }
}
