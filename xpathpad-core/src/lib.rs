//! xpathpad-core: XPath scratchpad library
//!
//! This library provides:
//! - XPath 3.1 evaluation over XML text (via xee-xpath)
//! - An owned result node model
//! - Result rendering as reconstructed XML or as a flat list of values
//! - Namespace prefix discovery from raw XML

pub mod namespaces;
pub mod node;
pub mod output;
pub mod sample;
pub mod source;
pub mod xpath;

pub use namespaces::extract_namespaces;
pub use node::{Attribute, ResultNode};
pub use output::{
    flatten_node, flatten_sequence, format_results, render_node, render_sequence, OutputFormat,
    OutputOptions, RenderOptions,
};
pub use source::{load_xml_file, InputError};
pub use xpath::{QueryError, XPathEngine, XmlDocument};
