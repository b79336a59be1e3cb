//! Read models for CQRS-lite pattern
//!
//! View-optimized structs that formatters render from.

mod graph_document;
mod graph_document_builder;

pub use graph_document::{GraphDocument, GraphMetadataView, GraphStats};
pub use graph_document_builder::GraphDocumentBuilder;
