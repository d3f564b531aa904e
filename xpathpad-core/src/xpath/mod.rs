//! XPath 3.1 query engine using xee-xpath
//!
//! This module evaluates XPath expressions against XML text and converts the
//! resulting sequence into owned [`ResultNode`](crate::ResultNode)s.

mod convert;
mod engine;

pub use engine::{XPathEngine, XmlDocument};

use thiserror::Error;

/// Errors that can occur while evaluating a query
///
/// Whatever went wrong, the message is meant to be shown to the user as is.
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Failed to parse XML: {0}")]
    XmlParse(String),
    #[error("Failed to compile XPath: {0}")]
    Compile(String),
    #[error("Failed to execute XPath: {0}")]
    Execute(String),
}
