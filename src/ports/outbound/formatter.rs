use crate::application::read_models::GraphDocument;
use crate::shared::Result;

/// GraphFormatter port for rendering a graph document
///
/// Implementations exist for the renderer hand-off (Cytoscape JSON)
/// and a human-readable Markdown report.
pub trait GraphFormatter {
    /// Formats the document
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, document: &GraphDocument) -> Result<String>;
}
