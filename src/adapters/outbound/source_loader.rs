use super::filesystem::FileSystemReader;
use super::network::HttpFetcher;
use crate::graph_projection::domain::SourceLocation;
use crate::ports::outbound::SourceReader;
use crate::shared::Result;

/// SourceLoader adapter reading from whichever backend a location needs
///
/// Local paths go to the file system reader; http(s) URLs go to the
/// HTTP fetcher.
pub struct SourceLoader {
    files: FileSystemReader,
    http: HttpFetcher,
}

impl SourceLoader {
    pub fn new() -> Result<Self> {
        Ok(Self {
            files: FileSystemReader::new(),
            http: HttpFetcher::new()?,
        })
    }
}

impl SourceReader for SourceLoader {
    fn read_source(&self, location: &SourceLocation) -> Result<Vec<u8>> {
        match location {
            SourceLocation::File(_) => self.files.read_source(location),
            SourceLocation::Remote(_) => self.http.read_source(location),
        }
    }
}
