/// Mock implementations for testing
mod mock_decoder;
mod mock_progress_reporter;
mod mock_source_reader;

pub use mock_decoder::MockDecoder;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_source_reader::MockSourceReader;
