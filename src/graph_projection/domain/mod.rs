pub mod device_tree;
pub mod device_tree_format;
pub mod graph_element;
pub mod graph_metadata;
pub mod layout;
pub mod property_map;
pub mod property_value;
pub mod selection;
pub mod source_location;

pub use device_tree::{DeviceTreeNode, Property};
pub use device_tree_format::DeviceTreeFormat;
pub use graph_element::{EdgeElement, GraphElement, NodeElement, EDGE_ID_SEPARATOR};
pub use graph_metadata::GraphMetadata;
pub use layout::{LayoutName, LayoutOptions};
pub use property_map::PropertyMap;
pub use property_value::PropertyValue;
pub use selection::SelectionReport;
pub use source_location::SourceLocation;
