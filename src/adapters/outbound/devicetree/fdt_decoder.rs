use super::property_decoder;
use crate::graph_projection::domain::{DeviceTreeNode, Property};
use crate::shared::error::GraphError;
use crate::shared::Result;
use fdt::node::FdtNode;
use fdt::Fdt;

/// Name given to the root node, whose name is empty inside a blob
const ROOT_NAME: &str = "/";

/// FdtDecoder converting a flattened device tree blob into the domain tree
pub struct FdtDecoder;

impl FdtDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Parses `bytes` and converts everything below `/`
    ///
    /// # Arguments
    /// * `bytes` - A complete blob, header included
    /// * `origin` - Label for error messages (path or URL)
    pub fn decode_blob(&self, bytes: &[u8], origin: &str) -> Result<DeviceTreeNode> {
        let decode_error = |details: String| GraphError::DecodeError {
            origin: origin.to_string(),
            details,
        };

        let fdt = Fdt::new(bytes).map_err(|e| decode_error(format!("{:?}", e)))?;
        let root = fdt
            .find_node("/")
            .ok_or_else(|| decode_error("The blob has no root node".to_string()))?;

        Ok(Self::convert(root))
    }

    fn convert(node: FdtNode<'_, '_>) -> DeviceTreeNode {
        let name = if node.name.is_empty() {
            ROOT_NAME
        } else {
            node.name
        };

        let properties = node
            .properties()
            .map(|property| Property::new(property.name, property_decoder::classify(property.value)))
            .collect();
        let children = node.children().map(Self::convert).collect();

        DeviceTreeNode::with_parts(name, properties, children)
    }
}

impl Default for FdtDecoder {
    fn default() -> Self {
        Self::new()
    }
}
