use crate::application::read_models::GraphDocument;
use crate::graph_projection::domain::{EdgeElement, NodeElement, PropertyValue, SelectionReport};
use crate::graph_projection::services::REG_HEX_KEY;
use crate::ports::outbound::GraphFormatter;
use crate::shared::Result;

/// Markdown table header for node information
const NODE_TABLE_HEADER: &str = "| Node | Label | Compatible | Children | reg_hex |\n";

/// Markdown table separator line for node information
const NODE_TABLE_SEPARATOR: &str = "|------|-------|------------|----------|---------|\n";

/// Markdown table header for edge information
const EDGE_TABLE_HEADER: &str = "| Edge | Parent | Child |\n";

/// Markdown table separator line for edge information
const EDGE_TABLE_SEPARATOR: &str = "|------|--------|-------|\n";

/// Markdown table header for the properties of a selected node
const PROPERTY_TABLE_HEADER: &str = "| Property | Value |\n";

/// Markdown table separator line for node properties
const PROPERTY_TABLE_SEPARATOR: &str = "|----------|-------|\n";

/// MarkdownFormatter adapter for a human-readable device tree report
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn reg_hex(node: &NodeElement) -> &str {
        node.properties
            .get(REG_HEX_KEY)
            .and_then(PropertyValue::as_text)
            .unwrap_or("")
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String) {
        output.push_str("# Device Tree Graph\n\n");
    }

    fn render_summary(&self, output: &mut String, document: &GraphDocument) {
        let metadata = &document.metadata;
        let stats = &document.stats;

        output.push_str("## Summary\n\n");
        output.push_str("| Item | Value |\n");
        output.push_str("|------|-------|\n");
        let rows = [
            ("Source", metadata.source.clone()),
            ("Generated", metadata.timestamp.clone()),
            (
                "Tool",
                format!("{} {}", metadata.tool_name, metadata.tool_version),
            ),
            ("Nodes", stats.node_count.to_string()),
            ("Edges", stats.edge_count.to_string()),
            ("Leaf nodes", stats.leaf_count.to_string()),
            ("Maximum depth", stats.max_depth.to_string()),
            ("Layout", document.layout.name.to_string()),
        ];
        for (item, value) in rows {
            output.push_str(&format!(
                "| {} | {} |\n",
                item,
                Self::escape_markdown_table_cell(&value)
            ));
        }
        output.push('\n');
    }

    fn render_nodes<'a>(&self, output: &mut String, nodes: impl Iterator<Item = &'a NodeElement>) {
        output.push_str(NODE_TABLE_HEADER);
        output.push_str(NODE_TABLE_SEPARATOR);
        for node in nodes {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&node.id),
                Self::escape_markdown_table_cell(&node.display_name),
                Self::escape_markdown_table_cell(&node.compatible_string),
                node.child_count,
                Self::escape_markdown_table_cell(Self::reg_hex(node)),
            ));
        }
        output.push('\n');
    }

    fn render_edges<'a>(&self, output: &mut String, edges: impl Iterator<Item = &'a EdgeElement>) {
        let mut edges = edges.peekable();
        if edges.peek().is_none() {
            output.push_str("*No edges*\n\n");
            return;
        }

        output.push_str(EDGE_TABLE_HEADER);
        output.push_str(EDGE_TABLE_SEPARATOR);
        for edge in edges {
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&edge.id),
                Self::escape_markdown_table_cell(&edge.source_id),
                Self::escape_markdown_table_cell(&edge.target_id),
            ));
        }
        output.push('\n');
    }

    fn render_properties(&self, output: &mut String, node: &NodeElement) {
        output.push_str(&format!("#### {}\n\n", Self::escape_markdown_table_cell(&node.id)));
        if node.properties.is_empty() {
            output.push_str("*No properties*\n\n");
            return;
        }

        output.push_str(PROPERTY_TABLE_HEADER);
        output.push_str(PROPERTY_TABLE_SEPARATOR);
        for (name, value) in node.properties.iter() {
            output.push_str(&format!(
                "| {} | {} |\n",
                Self::escape_markdown_table_cell(name),
                Self::escape_markdown_table_cell(&value.display()),
            ));
        }
        output.push('\n');
    }

    fn render_selection(&self, output: &mut String, selection: &SelectionReport) {
        output.push_str("## Selection\n\n");

        if selection.nodes.is_empty() {
            output.push_str("*No selected node exists in the device tree*\n\n");
        } else {
            output.push_str("### Selected Nodes\n\n");
            self.render_nodes(output, selection.nodes.iter());
            output.push_str("### Connecting Edges\n\n");
            self.render_edges(output, selection.edges.iter());
            output.push_str("### Node Properties\n\n");
            for node in &selection.nodes {
                self.render_properties(output, node);
            }
        }

        if !selection.unmatched.is_empty() {
            let unmatched: Vec<String> = selection
                .unmatched
                .iter()
                .map(|id| format!("`{}`", id))
                .collect();
            output.push_str(&format!("Not found: {}\n\n", unmatched.join(", ")));
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphFormatter for MarkdownFormatter {
    fn format(&self, document: &GraphDocument) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output);
        self.render_summary(&mut output, document);

        output.push_str("## Nodes\n\n");
        self.render_nodes(&mut output, document.nodes());

        output.push_str("## Edges\n\n");
        self.render_edges(&mut output, document.edges());

        if let Some(selection) = &document.selection {
            self.render_selection(&mut output, selection);
        }

        Ok(output)
    }
}
