use crate::graph_projection::domain::{
    DeviceTreeNode, EdgeElement, GraphElement, NodeElement, PropertyMap, PropertyValue,
};
use crate::graph_projection::policies::LabelPolicy;

/// Weight given to nodes that have children, so the renderer draws them larger
pub const PARENT_WEIGHT: u32 = 1024;

/// Weight given to leaf nodes
pub const LEAF_WEIGHT: u32 = 0;

/// Name of the derived property holding the hex rendering of `reg`
pub const REG_HEX_KEY: &str = "reg_hex";

/// TreeProjector service flattening a device tree into graph elements
///
/// The output is a pre-order walk: a node's element comes first, then for
/// each child in order the parent->child edge followed by the child's own
/// projection. A tree of `n` nodes therefore yields `2n - 1` elements.
pub struct TreeProjector;

impl TreeProjector {
    pub fn project(root: &DeviceTreeNode) -> Vec<GraphElement> {
        let mut elements = Vec::with_capacity(root.node_count() * 2 - 1);
        Self::project_into(root, &mut elements);
        elements
    }

    fn project_into(node: &DeviceTreeNode, elements: &mut Vec<GraphElement>) {
        elements.push(GraphElement::Node(Self::node_element(node)));

        for child in node.children() {
            elements.push(GraphElement::Edge(EdgeElement::between(
                node.name(),
                child.name(),
            )));
            Self::project_into(child, elements);
        }
    }

    fn node_element(node: &DeviceTreeNode) -> NodeElement {
        let compatible = Self::concatenated_text(node, "compatible");
        let model = Self::concatenated_text(node, "model");

        NodeElement {
            id: node.name().to_string(),
            display_name: LabelPolicy::display_name(node.name(), Some(&model), Some(&compatible)),
            compatible_string: compatible,
            properties: Self::property_map(node),
            child_count: node.children().len(),
            weight: if node.is_leaf() {
                LEAF_WEIGHT
            } else {
                PARENT_WEIGHT
            },
        }
    }

    /// Joins the text view of every property called `name`, in encounter order
    fn concatenated_text(node: &DeviceTreeNode, name: &str) -> String {
        node.properties_named(name)
            .filter_map(|property| property.value().as_text())
            .collect()
    }

    /// Copies every property, placing `reg_hex` right after a numeric `reg`.
    /// A repeated `reg` refreshes the value while both keys keep their position.
    fn property_map(node: &DeviceTreeNode) -> PropertyMap {
        let mut map = PropertyMap::new();
        for property in node.properties() {
            map.insert(property.name(), property.value().clone());

            // A reg without a numeric view simply gets no reg_hex
            if property.name() == "reg" {
                if let Some(reg) = property.value().as_integer() {
                    map.insert(REG_HEX_KEY, PropertyValue::text(format!("{:#x}", reg)));
                }
            }
        }
        map
    }
}
