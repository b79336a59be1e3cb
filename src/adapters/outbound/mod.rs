/// Outbound adapters - Infrastructure implementations of outbound ports
pub mod console;
pub mod devicetree;
pub mod filesystem;
pub mod formatters;
pub mod network;
pub mod source_loader;

pub use source_loader::SourceLoader;
