/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to reach the file system, the network, the device tree compiler and
/// the console.
pub mod device_tree_decoder;
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;
pub mod source_reader;

pub use device_tree_decoder::DeviceTreeDecoder;
pub use formatter::GraphFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use source_reader::SourceReader;
