use dtgraph::prelude::*;

/// Mock DeviceTreeDecoder returning a preset tree regardless of input
pub struct MockDecoder {
    tree: DeviceTreeNode,
}

impl MockDecoder {
    pub fn new(tree: DeviceTreeNode) -> Self {
        Self { tree }
    }
}

impl DeviceTreeDecoder for MockDecoder {
    fn decode(
        &self,
        _bytes: &[u8],
        _format: DeviceTreeFormat,
        _origin: &SourceLocation,
    ) -> Result<DeviceTreeNode> {
        Ok(self.tree.clone())
    }
}
