use super::PropertyValue;

/// Property value object: a named attribute of a device tree node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    name: String,
    value: PropertyValue,
}

impl Property {
    pub fn new(name: impl Into<String>, value: PropertyValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &PropertyValue {
        &self.value
    }
}

/// DeviceTreeNode aggregate representing one node of a parsed device tree
///
/// Children are owned by their parent, so a tree built from this type
/// can never contain cycles or shared subtrees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceTreeNode {
    name: String,
    properties: Vec<Property>,
    children: Vec<DeviceTreeNode>,
}

impl DeviceTreeNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_parts(
        name: impl Into<String>,
        properties: Vec<Property>,
        children: Vec<DeviceTreeNode>,
    ) -> Self {
        Self {
            name: name.into(),
            properties,
            children,
        }
    }

    pub fn with_property(mut self, name: impl Into<String>, value: PropertyValue) -> Self {
        self.properties.push(Property::new(name, value));
        self
    }

    pub fn with_child(mut self, child: DeviceTreeNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn children(&self) -> &[DeviceTreeNode] {
        &self.children
    }

    /// All properties with the given name, in encounter order
    pub fn properties_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Property> {
        self.properties.iter().filter(move |p| p.name == name)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree, including this node
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(|c| c.node_count()).sum::<usize>()
    }

    /// Number of parent-child relationships in this subtree
    pub fn edge_count(&self) -> usize {
        self.node_count() - 1
    }

    /// Number of childless nodes in this subtree
    pub fn leaf_count(&self) -> usize {
        if self.is_leaf() {
            1
        } else {
            self.children.iter().map(|c| c.leaf_count()).sum()
        }
    }

    /// Longest path from this node down to a leaf, counted in edges
    pub fn max_depth(&self) -> usize {
        self.children
            .iter()
            .map(|c| c.max_depth() + 1)
            .max()
            .unwrap_or(0)
    }
}
