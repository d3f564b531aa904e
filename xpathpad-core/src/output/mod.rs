//! Output formatting for query results
//!
//! Supports multiple output formats:
//! - report: reconstructed XML followed by the flat value list
//! - xml: reconstructed XML of the result nodes
//! - list: quoted flat values, one per line
//! - value: flat values, one per line
//! - json: JSON array with kind, name and value per result
//! - count: number of results

mod colors;
mod flatten;
mod formatter;
pub mod xml_renderer;

pub use colors::should_use_color;
pub use flatten::{flatten_node, flatten_sequence};
pub use formatter::{format_results, OutputFormat, OutputOptions, LIST_HEADING, NO_RESULTS};
pub use xml_renderer::{render_node, render_node_with_indent, render_sequence, RenderOptions, DEFAULT_INDENT};
