mod element_inspector;
mod metadata_generator;
mod tree_projector;

pub use element_inspector::ElementInspector;
pub use metadata_generator::MetadataGenerator;
pub use tree_projector::{TreeProjector, LEAF_WEIGHT, PARENT_WEIGHT, REG_HEX_KEY};
