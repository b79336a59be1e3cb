use crate::shared::error::GraphError;
use crate::shared::Result;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Layout algorithms understood by the graph renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutName {
    Klay,
    Breadthfirst,
    Concentric,
    Grid,
    Cose,
    Circle,
    CoseBilkent,
    Cola,
    Euler,
    Spread,
    Dagre,
    Random,
}

impl LayoutName {
    pub const ALL: [LayoutName; 12] = [
        LayoutName::Klay,
        LayoutName::Breadthfirst,
        LayoutName::Concentric,
        LayoutName::Grid,
        LayoutName::Cose,
        LayoutName::Circle,
        LayoutName::CoseBilkent,
        LayoutName::Cola,
        LayoutName::Euler,
        LayoutName::Spread,
        LayoutName::Dagre,
        LayoutName::Random,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutName::Klay => "klay",
            LayoutName::Breadthfirst => "breadthfirst",
            LayoutName::Concentric => "concentric",
            LayoutName::Grid => "grid",
            LayoutName::Cose => "cose",
            LayoutName::Circle => "circle",
            LayoutName::CoseBilkent => "cose-bilkent",
            LayoutName::Cola => "cola",
            LayoutName::Euler => "euler",
            LayoutName::Spread => "spread",
            LayoutName::Dagre => "dagre",
            LayoutName::Random => "random",
        }
    }
}

impl fmt::Display for LayoutName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutName {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        LayoutName::ALL
            .iter()
            .copied()
            .find(|name| name.as_str() == wanted)
            .ok_or_else(|| {
                let known: Vec<&str> = LayoutName::ALL.iter().map(|n| n.as_str()).collect();
                GraphError::Validation {
                    message: format!(
                        "Unknown layout '{}'. Valid layouts: {}",
                        s,
                        known.join(", ")
                    ),
                }
                .into()
            })
    }
}

/// LayoutOptions value object: the layout block handed to the renderer
///
/// Only the renderer runs the algorithm; these are its parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutOptions {
    pub name: LayoutName,
    pub ideal_edge_length: u32,
    pub node_overlap: u32,
    pub refresh: u32,
    pub fit: bool,
    pub padding: u32,
    pub randomize: bool,
    pub component_spacing: u32,
    pub node_repulsion: u32,
    pub edge_elasticity: u32,
    pub nesting_factor: u32,
    pub gravity: u32,
    pub num_iter: u32,
    pub initial_temp: u32,
    pub cooling_factor: f64,
    pub min_temp: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animate: Option<bool>,
}

impl LayoutOptions {
    /// Preset used for the first render of a freshly loaded tree
    pub fn initial() -> Self {
        Self {
            name: LayoutName::Cose,
            ideal_edge_length: 400,
            node_overlap: 20,
            refresh: 20,
            fit: true,
            padding: 30,
            randomize: false,
            component_spacing: 100,
            node_repulsion: 4_000_000,
            edge_elasticity: 500,
            nesting_factor: 5,
            gravity: 8,
            num_iter: 1000,
            initial_temp: 200,
            cooling_factor: 0.95,
            min_temp: 1.0,
            animate: None,
        }
    }

    /// Preset used when the user switches to another layout
    pub fn for_layout(name: LayoutName) -> Self {
        Self {
            name,
            node_repulsion: 2_000_000,
            gravity: 15,
            initial_temp: 2000,
            animate: Some(true),
            ..Self::initial()
        }
    }
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self::initial()
    }
}
