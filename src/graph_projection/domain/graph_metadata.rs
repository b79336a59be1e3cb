/// GraphMetadata value object describing one generated graph document
#[derive(Debug, Clone)]
pub struct GraphMetadata {
    timestamp: String,
    tool_name: String,
    tool_version: String,
    source: String,
}

impl GraphMetadata {
    pub fn new(timestamp: String, tool_name: String, tool_version: String, source: String) -> Self {
        Self {
            timestamp,
            tool_name,
            tool_version,
            source,
        }
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    /// The device tree file path or URL the graph was built from
    pub fn source(&self) -> &str {
        &self.source
    }
}
