//! CLI argument parsing using clap

use clap::Parser;

/// XPath scratchpad: run XPath 3.1 against an XML document and inspect the results
#[derive(Parser, Debug)]
#[command(name = "xpathpad")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Query a file once
    xpathpad books.xml -x "//book/title"

    # Just the values, one per line
    xpathpad books.xml -x "//@lang" -o value

    # Query XML from stdin
    cat books.xml | xpathpad -x "count(//book)"

    # Bind a prefix for a default namespace
    xpathpad feed.xml -N atom=http://www.w3.org/2005/Atom -x "//atom:title"

    # Interactive prompt on the built-in sample document
    xpathpad --sample
"#)]
pub struct Args {
    /// XML file to query (reads stdin when omitted and stdin is not a terminal)
    #[arg()]
    pub file: Option<String>,

    /// XPath 3.1 query expression (omit to start the interactive prompt)
    #[arg(short = 'x', long = "xpath")]
    pub xpath: Option<String>,

    /// Output format: report (default), xml, list, value, json, count
    #[arg(short = 'o', long = "output", default_value = "report")]
    pub output: String,

    /// Query the built-in bookstore sample document
    #[arg(long = "sample")]
    pub sample: bool,

    /// Start the interactive prompt even when --xpath is given
    #[arg(short = 'i', long = "interactive")]
    pub interactive: bool,

    /// Extra namespace binding as prefix=uri (repeatable)
    #[arg(short = 'N', long = "namespace", value_name = "PREFIX=URI")]
    pub namespaces: Vec<String>,

    /// Spaces per indentation level in XML output
    #[arg(long = "indent", default_value_t = 4)]
    pub indent: usize,

    /// Limit XML output depth (deeper elements are summarized)
    #[arg(short = 'd', long = "depth")]
    pub depth: Option<usize>,

    /// Escape special characters in text and attribute values
    #[arg(long = "escape")]
    pub escape: bool,

    /// Color output: auto (default), always, never
    #[arg(long = "color", default_value = "auto")]
    pub color: String,

    /// Disable color output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Show verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}
