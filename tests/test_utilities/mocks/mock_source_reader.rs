use dtgraph::prelude::*;
use dtgraph::shared::error::GraphError;
use std::collections::HashMap;

/// Mock SourceReader serving in-memory content keyed by location
#[derive(Default)]
pub struct MockSourceReader {
    sources: HashMap<String, Vec<u8>>,
    should_fail: bool,
}

impl MockSourceReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(mut self, location: &str, content: impl Into<Vec<u8>>) -> Self {
        self.sources.insert(location.to_string(), content.into());
        self
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }
}

impl SourceReader for MockSourceReader {
    fn read_source(&self, location: &SourceLocation) -> Result<Vec<u8>> {
        if self.should_fail {
            anyhow::bail!("Mock source reader failure");
        }
        let key = location.to_string();
        self.sources.get(&key).cloned().ok_or_else(|| {
            GraphError::SourceNotFound { path: key.into() }.into()
        })
    }
}
