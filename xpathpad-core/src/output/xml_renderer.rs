//! Reconstructs XML text from query result nodes
//!
//! The output is shaped for reading, not for round-tripping: each node gets a
//! line of its own, text leaves are trimmed, and a named node with a value but
//! no attributes or children is shown as `name="value"` because that is what a
//! directly selected attribute looks like.

use crate::node::{Attribute, ResultNode};
use crate::output::colors::{ansi, paint};

/// Default indentation unit (four spaces)
pub const DEFAULT_INDENT: &str = "    ";

/// Options for XML rendering
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Whether to use ANSI colors
    pub use_color: bool,
    /// Indentation added per nesting level
    pub indent: String,
    /// Maximum element depth to render (None = unlimited)
    pub max_depth: Option<usize>,
    /// Escape `& < > "` in text and attribute values. Off by default:
    /// values are shown exactly as the engine returned them.
    pub escape: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        RenderOptions {
            use_color: false,
            indent: DEFAULT_INDENT.to_string(),
            max_depth: None,
            escape: false,
        }
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    pub fn with_max_depth(mut self, depth: Option<usize>) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn with_escape(mut self, escape: bool) -> Self {
        self.escape = escape;
        self
    }
}

/// Render every node of a result sequence, in order
pub fn render_sequence(nodes: &[ResultNode], options: &RenderOptions) -> String {
    let mut output = String::new();
    for node in nodes {
        render_into(node, "", options, &mut output);
    }
    output
}

/// Render a single node at the top level
pub fn render_node(node: &ResultNode, options: &RenderOptions) -> String {
    render_node_with_indent(node, "", options)
}

/// Render a single node with every line prefixed by `indent`
pub fn render_node_with_indent(node: &ResultNode, indent: &str, options: &RenderOptions) -> String {
    let mut output = String::new();
    render_into(node, indent, options, &mut output);
    output
}

enum Step<'a> {
    Open(&'a ResultNode, usize),
    Close(&'a str, usize),
}

fn render_into(root: &ResultNode, base_indent: &str, options: &RenderOptions, output: &mut String) {
    let prefix = |depth: usize| format!("{}{}", base_indent, options.indent.repeat(depth));
    let mut stack = vec![Step::Open(root, 0)];

    while let Some(step) = stack.pop() {
        match step {
            Step::Close(name, depth) => {
                output.push_str(&prefix(depth));
                push_close_tag(name, options, output);
                output.push('\n');
            }
            Step::Open(node, depth) => {
                let indent = prefix(depth);
                let children = node.children();
                let attributes = node.attributes();

                let Some(name) = node.display_name() else {
                    // Unnamed: a leaf value, or whitespace filler
                    if let Some(value) = node.display_value() {
                        output.push_str(&indent);
                        output.push_str(&maybe_escape(&value, options));
                        output.push('\n');
                    }
                    continue;
                };

                if children.is_empty() {
                    match node.display_value() {
                        None => {
                            output.push_str(&indent);
                            push_open_tag(name, attributes, options, output);
                            paint(output, "/>", ansi::DIM, options.use_color);
                            output.push('\n');
                            continue;
                        }
                        Some(value) if attributes.is_empty() => {
                            output.push_str(&indent);
                            push_attribute(name, &value, options, output);
                            output.push('\n');
                            continue;
                        }
                        Some(_) => {}
                    }
                }

                output.push_str(&indent);
                push_open_tag(name, attributes, options, output);
                paint(output, ">", ansi::DIM, options.use_color);
                output.push('\n');

                // Text-only children stay visible at the depth limit
                let hidden = match options.max_depth {
                    Some(max) if depth >= max => count_descendants(node),
                    _ => 0,
                };
                if hidden > 0 {
                    output.push_str(&prefix(depth + 1));
                    let comment = format!("<!-- ... ({} more) -->", hidden);
                    paint(output, &comment, ansi::DIM, options.use_color);
                    output.push('\n');
                    output.push_str(&indent);
                    push_close_tag(name, options, output);
                    output.push('\n');
                    continue;
                }

                stack.push(Step::Close(name, depth));
                for child in children.iter().rev() {
                    stack.push(Step::Open(child, depth + 1));
                }
            }
        }
    }
}

/// `<name attr="value" ...` without the closing bracket
fn push_open_tag(name: &str, attributes: &[Attribute], options: &RenderOptions, output: &mut String) {
    paint(output, "<", ansi::DIM, options.use_color);
    paint(output, name, ansi::BLUE, options.use_color);
    for attr in attributes {
        output.push(' ');
        push_attribute(&attr.name, &attr.value, options, output);
    }
}

fn push_close_tag(name: &str, options: &RenderOptions, output: &mut String) {
    paint(output, "</", ansi::DIM, options.use_color);
    paint(output, name, ansi::BLUE, options.use_color);
    paint(output, ">", ansi::DIM, options.use_color);
}

fn push_attribute(name: &str, value: &str, options: &RenderOptions, output: &mut String) {
    paint(output, name, ansi::CYAN, options.use_color);
    paint(output, "=\"", ansi::DIM, options.use_color);
    paint(output, &maybe_escape(value, options), ansi::YELLOW, options.use_color);
    paint(output, "\"", ansi::DIM, options.use_color);
}

/// Count all descendant elements
fn count_descendants(node: &ResultNode) -> usize {
    let mut count = 0;
    let mut stack: Vec<&ResultNode> = node.children().iter().collect();
    while let Some(child) = stack.pop() {
        if let ResultNode::Element { children, .. } = child {
            count += 1;
            stack.extend(children.iter());
        }
    }
    count
}

fn maybe_escape(s: &str, options: &RenderOptions) -> String {
    if options.escape {
        escape_xml(s)
    } else {
        s.to_string()
    }
}

/// Escape XML special characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
