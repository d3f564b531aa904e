//! Flat string view of query results

use crate::node::ResultNode;

/// Reduce a node to one string: its trimmed value, else its name, else `""`
pub fn flatten_node(node: &ResultNode) -> String {
    if let Some(value) = node.display_value() {
        return value;
    }
    node.display_name().map(str::to_string).unwrap_or_default()
}

/// Flatten every node of a result sequence
///
/// Order is preserved and nothing is filtered: duplicates and empty strings
/// stay in the list.
pub fn flatten_sequence(nodes: &[ResultNode]) -> Vec<String> {
    nodes.iter().map(flatten_node).collect()
}
