use crate::graph_projection::domain::{DeviceTreeFormat, DeviceTreeNode, SourceLocation};
use crate::shared::Result;

/// DeviceTreeDecoder port turning raw bytes into a device tree
///
/// Parsing the binary and text formats is left to the implementation
/// (a blob parser, or an external compiler for sources).
pub trait DeviceTreeDecoder {
    /// Decodes `bytes` in the given format into the root node
    ///
    /// # Arguments
    /// * `bytes` - Raw content as read by a `SourceReader`
    /// * `format` - Format detected from the source name
    /// * `origin` - Where the bytes came from, used for include paths and messages
    ///
    /// # Errors
    /// Returns an error if the content is not a valid device tree
    fn decode(
        &self,
        bytes: &[u8],
        format: DeviceTreeFormat,
        origin: &SourceLocation,
    ) -> Result<DeviceTreeNode>;
}
