//! Namespace prefix discovery
//!
//! Scans raw XML text for `xmlns:prefix="uri"` declarations so the prefixes can
//! be declared on the XPath static context. This is a textual scan: it does not
//! parse the document, and the default namespace (`xmlns="..."`) is not picked up.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

static XMLNS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"xmlns:([0-9A-Za-z_]+)="([^"]+)""#).unwrap());

/// Extract prefixed namespace declarations from XML text
///
/// Prefixes are ASCII word characters only; declarations with other prefixes
/// are skipped.
///
/// Returns a map of prefix to URI. When a prefix is declared more than once,
/// the last declaration in the text wins.
pub fn extract_namespaces(xml: &str) -> BTreeMap<String, String> {
    XMLNS_RE
        .captures_iter(xml)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_xsd_namespace() {
        let xml = r#"<schema xmlns:xsd="http://www.w3.org/2001/XMLSchema"/>"#;
        let namespaces = extract_namespaces(xml);
        assert_eq!(namespaces.len(), 1);
        assert_eq!(namespaces["xsd"], "http://www.w3.org/2001/XMLSchema");
    }

    #[test]
    fn test_no_declarations() {
        assert!(extract_namespaces("<bookstore><book/></bookstore>").is_empty());
        assert!(extract_namespaces("").is_empty());
    }

    #[test]
    fn test_default_namespace_is_not_matched() {
        let xml = r#"<feed xmlns="http://www.w3.org/2005/Atom"/>"#;
        assert!(extract_namespaces(xml).is_empty());
    }

    #[test]
    fn test_last_duplicate_prefix_wins() {
        let xml = r#"<a xmlns:p="urn:first"><b xmlns:p="urn:second" xmlns:q="urn:q"/></a>"#;
        let namespaces = extract_namespaces(xml);
        assert_eq!(namespaces.len(), 2);
        assert_eq!(namespaces["p"], "urn:second");
        assert_eq!(namespaces["q"], "urn:q");
    }

    #[test]
    fn test_single_quoted_declarations_are_not_matched() {
        let xml = "<a xmlns:p='urn:p'/>";
        assert!(extract_namespaces(xml).is_empty());
    }

    #[test]
    fn test_non_ascii_prefixes_are_skipped() {
        let xml = r#"<a xmlns:é="urn:e" xmlns:aé="urn:ae" xmlns:ok_1="urn:ok"/>"#;
        let namespaces = extract_namespaces(xml);
        assert_eq!(namespaces.len(), 1);
        assert_eq!(namespaces["ok_1"], "urn:ok");
    }
}
