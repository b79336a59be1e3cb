use crate::graph_projection::domain::{GraphElement, SelectionReport};
use std::collections::HashSet;

/// ElementInspector service answering "what touches these nodes?"
///
/// Mirrors what a graph view shows when nodes are selected: the selected
/// node elements plus every edge leading into or out of them.
pub struct ElementInspector;

impl ElementInspector {
    /// Collects the selected nodes and their incident edges
    ///
    /// Nodes and edges come back in element order; an edge joining two
    /// selected nodes is reported once. Ids that match no node are listed
    /// in `unmatched` in the order they were requested.
    pub fn select(elements: &[GraphElement], selected_ids: &[String]) -> SelectionReport {
        let wanted: HashSet<&str> = selected_ids.iter().map(String::as_str).collect();
        let mut report = SelectionReport::default();

        for element in elements {
            match element {
                GraphElement::Node(node) if wanted.contains(node.id.as_str()) => {
                    report.nodes.push(node.clone());
                }
                GraphElement::Edge(edge)
                    if wanted.contains(edge.source_id.as_str())
                        || wanted.contains(edge.target_id.as_str()) =>
                {
                    report.edges.push(edge.clone());
                }
                _ => {}
            }
        }

        let mut reported = HashSet::new();
        for id in selected_ids {
            let matched = report.nodes.iter().any(|node| &node.id == id);
            if !matched && reported.insert(id.as_str()) {
                report.unmatched.push(id.clone());
            }
        }

        report
    }
}
