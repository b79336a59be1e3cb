/// Formatter adapters for the supported output formats
mod cytoscape_formatter;
mod markdown_formatter;

pub use cytoscape_formatter::CytoscapeFormatter;
pub use markdown_formatter::MarkdownFormatter;
