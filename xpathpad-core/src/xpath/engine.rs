//! XPath 3.1 query engine implementation

use super::convert::convert_node;
use super::QueryError;
use crate::namespaces::extract_namespaces;
use crate::node::ResultNode;
use std::collections::BTreeMap;
use std::time::Instant;
use tracing::debug;
use xee_xpath::context::StaticContextBuilder;
use xee_xpath::{DocumentHandle, Documents, Queries, Query};

/// A parsed XML document that can be queried repeatedly
///
/// Holds the prefixes scraped from the document text plus any extra bindings,
/// and declares all of them on every query's static context.
pub struct XmlDocument {
    documents: Documents,
    handle: DocumentHandle,
    namespaces: BTreeMap<String, String>,
}

impl XmlDocument {
    /// Parse XML text, registering the `xmlns:prefix` declarations it contains
    pub fn parse(xml: &str) -> Result<Self, QueryError> {
        let t0 = Instant::now();
        let mut documents = Documents::new();
        let handle = documents
            .add_string_without_uri(xml)
            .map_err(|e| QueryError::XmlParse(e.to_string()))?;
        let namespaces = extract_namespaces(xml);

        debug!(
            elapsed_us = t0.elapsed().as_micros() as u64,
            namespaces = namespaces.len(),
            "loaded XML document"
        );
        for (prefix, uri) in &namespaces {
            debug!(%prefix, %uri, "registered namespace");
        }

        Ok(XmlDocument {
            documents,
            handle,
            namespaces,
        })
    }

    /// Add namespace bindings, replacing scraped ones with the same prefix
    pub fn with_namespaces<I>(mut self, bindings: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (prefix, uri) in bindings {
            debug!(%prefix, %uri, "registered namespace binding");
            self.namespaces.insert(prefix, uri);
        }
        self
    }

    /// Namespace prefixes declared for queries on this document
    pub fn namespaces(&self) -> &BTreeMap<String, String> {
        &self.namespaces
    }

    /// Evaluate an XPath expression with the document node as context item
    ///
    /// A blank expression selects nothing and is not sent to the engine.
    pub fn query(&mut self, xpath: &str) -> Result<Vec<ResultNode>, QueryError> {
        if xpath.trim().is_empty() {
            return Ok(Vec::new());
        }

        let mut builder = StaticContextBuilder::default();
        for (prefix, uri) in &self.namespaces {
            builder.add_namespace(prefix.as_str(), uri.as_str());
        }
        let queries = Queries::new(builder);
        let query = queries
            .sequence(xpath)
            .map_err(|e| QueryError::Compile(e.to_string()))?;

        let t0 = Instant::now();
        let results = query
            .execute(&mut self.documents, self.handle)
            .map_err(|e: xee_xpath::error::Error| QueryError::Execute(e.to_string()))?;
        let t1 = Instant::now();

        // Convert results to owned nodes
        let xot = self.documents.xot();
        let mut nodes = Vec::new();
        for item in results.iter() {
            match item {
                xee_xpath::Item::Node(node) => nodes.push(convert_node(xot, node)),
                xee_xpath::Item::Atomic(atomic) => {
                    let value = atomic.to_string().unwrap_or_default();
                    nodes.push(ResultNode::atomic(value));
                }
                xee_xpath::Item::Function(_) => {
                    debug!("skipping function item in result");
                }
            }
        }

        debug!(
            xpath,
            results = nodes.len(),
            exec_us = (t1 - t0).as_micros() as u64,
            convert_us = t1.elapsed().as_micros() as u64,
            "query evaluated"
        );

        Ok(nodes)
    }
}

/// XPath query engine using xee-xpath
///
/// Each call parses the XML afresh; use [`XPathEngine::load`] and
/// [`XmlDocument::query`] to run many expressions against one document.
#[derive(Debug, Clone, Default)]
pub struct XPathEngine {
    namespaces: Vec<(String, String)>,
}

impl XPathEngine {
    /// Create a new XPath engine
    pub fn new() -> Self {
        XPathEngine::default()
    }

    /// Declare an extra namespace prefix for every query
    ///
    /// Bindings take precedence over `xmlns:` declarations scraped from the XML.
    pub fn with_namespace(mut self, prefix: impl Into<String>, uri: impl Into<String>) -> Self {
        self.namespaces.push((prefix.into(), uri.into()));
        self
    }

    /// Parse XML into a reusable document with this engine's namespace bindings
    pub fn load(&self, xml: &str) -> Result<XmlDocument, QueryError> {
        Ok(XmlDocument::parse(xml)?.with_namespaces(self.namespaces.iter().cloned()))
    }

    /// Execute an XPath query against XML and return the result sequence
    ///
    /// Blank XML or a blank expression yields an empty sequence.
    pub fn query(&self, xml: &str, xpath: &str) -> Result<Vec<ResultNode>, QueryError> {
        if xml.trim().is_empty() || xpath.trim().is_empty() {
            return Ok(Vec::new());
        }
        self.load(xml)?.query(xpath)
    }
}
