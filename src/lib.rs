//! dtgraph - Device tree visualizer
//!
//! This library loads a device tree (source `.dts` or blob `.dtb`, from disk
//! or over HTTP) and projects it into the node/edge elements a graph renderer
//! draws, following hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`graph_projection`): Device tree model and the tree-to-graph projection
//! - **Application Layer** (`application`): Use cases, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use dtgraph::prelude::*;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let source_reader = SourceLoader::new()?;
//! let decoder = FdtDeviceTreeDecoder::new(DtcCompiler::new(DEFAULT_DTC));
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = GenerateGraphUseCase::new(source_reader, decoder, progress_reporter);
//!
//! // Execute
//! let request = GraphRequest::new(SourceLocation::parse("board.dtb"));
//! let response = use_case.execute(request)?;
//!
//! // Format output
//! let document = GraphDocumentBuilder::build(response);
//! let output = CytoscapeFormatter::new().format(&document)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod graph_projection;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::devicetree::{
        DtcCompiler, FdtDecoder, FdtDeviceTreeDecoder, DEFAULT_DTC,
    };
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{CytoscapeFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::network::HttpFetcher;
    pub use crate::adapters::outbound::SourceLoader;
    pub use crate::application::dto::{GraphRequest, GraphResponse, OutputFormat};
    pub use crate::application::read_models::{GraphDocument, GraphDocumentBuilder};
    pub use crate::application::use_cases::GenerateGraphUseCase;
    pub use crate::graph_projection::domain::{
        DeviceTreeFormat, DeviceTreeNode, EdgeElement, GraphElement, LayoutName, LayoutOptions,
        NodeElement, Property, PropertyValue, SelectionReport, SourceLocation,
    };
    pub use crate::graph_projection::policies::LabelPolicy;
    pub use crate::graph_projection::services::{ElementInspector, TreeProjector};
    pub use crate::ports::outbound::{
        DeviceTreeDecoder, GraphFormatter, OutputPresenter, ProgressReporter, SourceReader,
    };
    pub use crate::shared::Result;
}
