//! Output formatters for different output modes

use crate::node::ResultNode;
use crate::output::colors::{ansi, paint};
use crate::output::flatten::{flatten_node, flatten_sequence};
use crate::output::xml_renderer::{render_sequence, RenderOptions};
use serde::Serialize;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Reconstructed XML followed by the quoted value list
    Report,
    /// Reconstructed XML only
    Xml,
    /// Flattened values, one per line, in double quotes
    List,
    /// Flattened values, one per line
    Value,
    /// JSON array with kind, name and value per result
    Json,
    /// Number of results
    Count,
}

impl OutputFormat {
    /// Parse format from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "report" => Some(OutputFormat::Report),
            "xml" => Some(OutputFormat::Xml),
            "list" => Some(OutputFormat::List),
            "value" => Some(OutputFormat::Value),
            "json" => Some(OutputFormat::Json),
            "count" => Some(OutputFormat::Count),
            _ => None,
        }
    }

    /// Get list of all valid format names
    pub fn valid_formats() -> &'static [&'static str] {
        &["report", "xml", "list", "value", "json", "count"]
    }
}

/// Options for output formatting
#[derive(Debug, Clone, Default)]
pub struct OutputOptions {
    /// Options passed through to the XML renderer
    pub render: RenderOptions,
}

impl OutputOptions {
    fn use_color(&self) -> bool {
        self.render.use_color
    }
}

/// Heading printed between the XML and the value list in report output
pub const LIST_HEADING: &str = "list results:";

/// Shown instead of the value list when a query returned nothing
pub const NO_RESULTS: &str = "(no results)";

/// JSON output structure
#[derive(Serialize)]
struct JsonResult<'a> {
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    value: String,
}

/// Format query results according to the specified format
pub fn format_results(nodes: &[ResultNode], format: OutputFormat, options: &OutputOptions) -> String {
    match format {
        OutputFormat::Report => format_report(nodes, options),
        OutputFormat::Xml => render_sequence(nodes, &options.render),
        OutputFormat::List => format_list(nodes, options),
        OutputFormat::Value => format_value(nodes),
        OutputFormat::Json => format_json(nodes),
        OutputFormat::Count => format_count(nodes),
    }
}

fn format_report(nodes: &[ResultNode], options: &OutputOptions) -> String {
    let xml = render_sequence(nodes, &options.render);
    let mut list = format_list(nodes, options);
    if list.is_empty() {
        list = format!("{}\n", NO_RESULTS);
    }
    format!("{}\n\n{}\n{}", xml, LIST_HEADING, list)
}

fn format_list(nodes: &[ResultNode], options: &OutputOptions) -> String {
    let mut output = String::new();
    for value in flatten_sequence(nodes) {
        output.push('"');
        paint(&mut output, &value, ansi::GREEN, options.use_color());
        output.push_str("\"\n");
    }
    output
}

fn format_value(nodes: &[ResultNode]) -> String {
    let mut output = String::new();
    for value in flatten_sequence(nodes) {
        output.push_str(&value);
        output.push('\n');
    }
    output
}

fn format_json(nodes: &[ResultNode]) -> String {
    let json_results: Vec<JsonResult<'_>> = nodes
        .iter()
        .map(|node| JsonResult {
            kind: node.kind(),
            name: node.name(),
            value: flatten_node(node),
        })
        .collect();

    let mut output = serde_json::to_string_pretty(&json_results).unwrap_or_else(|_| "[]".to_string());
    output.push('\n');
    output
}

fn format_count(nodes: &[ResultNode]) -> String {
    format!("{}\n", nodes.len())
}
