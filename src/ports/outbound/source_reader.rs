use crate::graph_projection::domain::SourceLocation;
use crate::shared::Result;

/// SourceReader port for fetching raw input bytes
///
/// Device trees and stylesheets are both read through this port, from a
/// local file or an http(s) URL.
pub trait SourceReader {
    /// Reads the complete content behind `location`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist, is a symlink, or is not a regular file
    /// - The file exceeds the size limit
    /// - The HTTP request fails or returns a non-success status
    fn read_source(&self, location: &SourceLocation) -> Result<Vec<u8>>;
}
