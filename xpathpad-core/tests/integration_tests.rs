/// Integration tests for xpathpad-core
///
/// These tests verify:
/// 1. XPath querying of the sample document through xee-xpath
/// 2. XML reconstruction and flattening of real query results
/// 3. Namespace handling and error reporting

use std::io::Write;
use xpathpad_core::{
    flatten_sequence, format_results, load_xml_file, render_sequence,
    output::LIST_HEADING,
    sample::{SAMPLE_HINTS, SAMPLE_XML},
    OutputFormat, OutputOptions, QueryError, RenderOptions, ResultNode, XPathEngine,
};

fn query_sample(xpath: &str) -> Vec<ResultNode> {
    XPathEngine::new()
        .query(SAMPLE_XML, xpath)
        .expect("Query should succeed")
}

#[test]
fn test_render_books() {
    let results = query_sample("//book");
    assert_eq!(results.len(), 2, "Should find 2 books");

    let xml = render_sequence(&results, &RenderOptions::new());
    let expected = "\
<book>
    <title lang=\"eng\">
        Harry Potter
    </title>
    <price>
        29.99
    </price>
    <awesome/>
</book>
<book>
    <title lang=\"eng\">
        Learning XML
    </title>
    <price>
        39.95
    </price>
    <awesome stats=\"off\"/>
</book>
";
    assert_eq!(xml, expected);
}

#[test]
fn test_render_attribute_results() {
    let results = query_sample("//title/@lang");
    let xml = render_sequence(&results, &RenderOptions::new());
    assert_eq!(xml, "lang=\"eng\"\nlang=\"eng\"\nlang=\"fr\"\n");
    assert_eq!(flatten_sequence(&results), vec!["eng", "eng", "fr"]);
}

#[test]
fn test_book_descendant_attributes() {
    let results = query_sample("//book//@lang");
    assert_eq!(results.len(), 2);
}

#[test]
fn test_render_self_closing_results() {
    let results = query_sample("//awesome");
    let xml = render_sequence(&results, &RenderOptions::new());
    assert_eq!(xml, "<awesome/>\n<awesome stats=\"off\"/>\n");
    assert_eq!(flatten_sequence(&results), vec!["awesome", "awesome"]);
}

#[test]
fn test_flatten_titles() {
    let results = query_sample("//title");
    assert_eq!(
        flatten_sequence(&results),
        vec!["Harry Potter", "Learning XML", "Learning French"]
    );
}

#[test]
fn test_text_node_results() {
    let results = query_sample("//novel/title/text()");
    assert_eq!(render_sequence(&results, &RenderOptions::new()), "Learning French\n");
}

#[test]
fn test_document_node_renders_as_text() {
    let results = query_sample("/");
    assert_eq!(results.len(), 1);
    let xml = render_sequence(&results, &RenderOptions::new());
    assert!(xml.starts_with("Harry Potter"));
    assert!(xml.ends_with("30.95\n"));
}

#[test]
fn test_atomic_results() {
    let results = query_sample("count(//book)");
    assert_eq!(render_sequence(&results, &RenderOptions::new()), "2\n");
    assert_eq!(flatten_sequence(&results), vec!["2"]);
}

#[test]
fn test_every_hint_runs() {
    for (xpath, _) in SAMPLE_HINTS {
        let results = query_sample(xpath);
        assert!(!results.is_empty(), "{} should select something", xpath);
    }
}

#[test]
fn test_report_output() {
    let results = query_sample("//novel/title");
    let output = format_results(&results, OutputFormat::Report, &OutputOptions::default());
    let expected = format!(
        "<title lang=\"fr\">\n    Learning French\n</title>\n\n\n{}\n\"Learning French\"\n",
        LIST_HEADING
    );
    assert_eq!(output, expected);
}

#[test]
fn test_no_results_report() {
    let results = query_sample("//magazine");
    assert!(results.is_empty());
    let output = format_results(&results, OutputFormat::Report, &OutputOptions::default());
    assert!(output.ends_with("(no results)\n"));
}

#[test]
fn test_prefixed_query_with_declared_namespace() {
    let xml = r#"<xsd:schema xmlns:xsd="http://www.w3.org/2001/XMLSchema">
  <xsd:element name="book" type="xsd:string"/>
  <xsd:element name="price" type="xsd:decimal"/>
</xsd:schema>"#;

    let results = XPathEngine::new()
        .query(xml, "//xsd:element/@name")
        .expect("Query should succeed");
    assert_eq!(flatten_sequence(&results), vec!["book", "price"]);

    let elements = XPathEngine::new().query(xml, "//xsd:element").unwrap();
    assert_eq!(
        render_sequence(&elements, &RenderOptions::new()),
        "<xsd:element name=\"book\" type=\"xsd:string\"/>\n<xsd:element name=\"price\" type=\"xsd:decimal\"/>\n"
    );
}

#[test]
fn test_undeclared_prefix_is_a_query_error() {
    let err = XPathEngine::new()
        .query(SAMPLE_XML, "//xsd:element")
        .unwrap_err();
    assert!(
        matches!(err, QueryError::Compile(_) | QueryError::Execute(_)),
        "got {:?}",
        err
    );
}

#[test]
fn test_malformed_xml_is_a_query_error() {
    let err = XPathEngine::new()
        .query("<bookstore><book>", "//book")
        .unwrap_err();
    assert!(matches!(err, QueryError::XmlParse(_)), "got {:?}", err);
}

#[test]
fn test_query_loaded_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SAMPLE_XML.as_bytes()).unwrap();

    let xml = load_xml_file(file.path()).expect("Should load XML");
    let mut doc = XPathEngine::new().load(&xml).expect("Should parse XML");
    assert_eq!(doc.query("//book").unwrap().len(), 2);
    assert_eq!(doc.query("//novel").unwrap().len(), 1);
}

#[test]
fn test_deep_document_round_trip() {
    let depth = 5_000;
    let xml = format!("{}deep{}", "<n>".repeat(depth), "</n>".repeat(depth));
    let results = XPathEngine::new().query(&xml, "/n").unwrap();
    let rendered = render_sequence(&results, &RenderOptions::new().with_indent(""));
    assert_eq!(rendered.lines().count(), depth * 2 + 1);
    assert_eq!(flatten_sequence(&results), vec!["deep"]);
}
