use crate::graph_projection::domain::GraphMetadata;
use chrono::Utc;

/// MetadataGenerator service for stamping generated graph documents
pub struct MetadataGenerator;

impl MetadataGenerator {
    /// Generates metadata with the current timestamp (RFC 3339)
    pub fn generate_metadata(tool_name: &str, tool_version: &str, source: &str) -> GraphMetadata {
        GraphMetadata::new(
            Utc::now().to_rfc3339(),
            tool_name.to_string(),
            tool_version.to_string(),
            source.to_string(),
        )
    }

    /// Generates metadata naming this tool at its compile-time version
    pub fn generate_default_metadata(source: &str) -> GraphMetadata {
        Self::generate_metadata("dtgraph", env!("CARGO_PKG_VERSION"), source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_metadata() {
        let metadata = MetadataGenerator::generate_metadata("test-tool", "1.0.0", "board.dtb");

        assert_eq!(metadata.tool_name(), "test-tool");
        assert_eq!(metadata.tool_version(), "1.0.0");
        assert_eq!(metadata.source(), "board.dtb");
        assert!(!metadata.timestamp().is_empty());
    }

    #[test]
    fn test_generate_default_metadata() {
        let metadata = MetadataGenerator::generate_default_metadata("https://example.com/a.dtb");

        assert_eq!(metadata.tool_name(), "dtgraph");
        assert_eq!(metadata.tool_version(), env!("CARGO_PKG_VERSION"));
        assert_eq!(metadata.source(), "https://example.com/a.dtb");
    }

    #[test]
    fn test_timestamp_is_rfc3339() {
        let metadata = MetadataGenerator::generate_metadata("test-tool", "1.0.0", "x.dts");
        assert!(chrono::DateTime::parse_from_rfc3339(metadata.timestamp()).is_ok());
    }
}
