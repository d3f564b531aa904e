//! xpathpad - XPath scratchpad
//!
//! This is the main CLI entry point: it reads the document, evaluates XPath
//! expressions once or in an interactive prompt, and prints the results.

mod cli;
mod interactive;

use std::io::{self, Read};
use std::path::Path;
use std::process::ExitCode;

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use xpathpad_core::{
    format_results, load_xml_file,
    output::should_use_color,
    sample::{format_hints, SAMPLE_XML},
    OutputFormat, OutputOptions, RenderOptions, XPathEngine,
};

use clap::Parser;
use cli::Args;
use interactive::Prompt;

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Log to stderr; `-v` lowers the default level, `RUST_LOG` overrides both
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// Where the document came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    File,
    Sample,
    Stdin,
}

/// Parse a `prefix=uri` namespace binding
fn parse_namespace_binding(binding: &str) -> Result<(String, String), String> {
    let invalid = || format!("invalid namespace binding '{}': expected prefix=uri", binding);
    let (prefix, uri) = binding.split_once('=').ok_or_else(invalid)?;
    let prefix = prefix.trim();
    let uri = uri.trim();
    let valid_prefix = !prefix.is_empty()
        && prefix.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '-' || c == '.');
    if !valid_prefix || uri.is_empty() {
        return Err(invalid());
    }
    Ok((prefix.to_string(), uri.to_string()))
}

/// Pick the document source: FILE, then --sample, then piped stdin
fn select_source(args: &Args, stdin_is_tty: bool) -> Option<Source> {
    if args.file.is_some() {
        Some(Source::File)
    } else if args.sample {
        Some(Source::Sample)
    } else if !stdin_is_tty {
        Some(Source::Stdin)
    } else {
        None
    }
}

fn read_document(args: &Args, source: Source) -> Result<String, Box<dyn std::error::Error>> {
    match (source, args.file.as_deref()) {
        (Source::File, Some(path)) => {
            info!(path, "reading document");
            Ok(load_xml_file(Path::new(path))?)
        }
        (Source::Stdin, _) => {
            let mut xml = String::new();
            io::stdin().read_to_string(&mut xml)?;
            Ok(xml)
        }
        _ => Ok(SAMPLE_XML.to_string()),
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    // Validate output format
    let format = OutputFormat::from_str(&args.output).ok_or_else(|| {
        format!(
            "invalid format '{}'. Valid formats: {}",
            args.output,
            OutputFormat::valid_formats().join(", ")
        )
    })?;

    let bindings = args
        .namespaces
        .iter()
        .map(|binding| parse_namespace_binding(binding))
        .collect::<Result<Vec<_>, _>>()?;

    // Determine color mode
    let use_color = if args.no_color {
        false
    } else {
        should_use_color(&args.color)
    };

    let options = OutputOptions {
        render: RenderOptions::new()
            .with_color(use_color)
            .with_indent(" ".repeat(args.indent))
            .with_max_depth(args.depth)
            .with_escape(args.escape),
    };

    let stdin_is_tty = atty::is(atty::Stream::Stdin);
    let Some(source) = select_source(&args, stdin_is_tty) else {
        eprintln!("Usage: xpathpad <file.xml> -x \"//query\"");
        eprintln!("   or: cat file.xml | xpathpad -x \"//query\"");
        eprintln!("   or: xpathpad --sample");
        eprintln!("\nUse --help for more information.");
        return Err("no input document".into());
    };

    let interactive = args.interactive || args.xpath.is_none();
    if interactive && source == Source::Stdin {
        return Err("interactive mode reads expressions from stdin; pass a FILE or --sample, or use --xpath".into());
    }

    let xml = read_document(&args, source)?;
    debug!(?source, bytes = xml.len(), "document read");

    let mut engine = XPathEngine::new();
    for (prefix, uri) in bindings {
        engine = engine.with_namespace(prefix, uri);
    }

    if !interactive {
        let xpath = args.xpath.as_deref().unwrap_or_default();
        let results = engine.query(&xml, xpath)?;
        print!("{}", format_results(&results, format, &options));
        return Ok(());
    }

    let mut doc = engine.load(&xml)?;
    let prompt = Prompt {
        format,
        options,
        show_prompt: stdin_is_tty,
    };

    if stdin_is_tty && source == Source::Sample {
        print!("{}", format_hints());
    }
    if let Some(ref xpath) = args.xpath {
        match doc.query(xpath) {
            Ok(results) => print!("{}", format_results(&results, prompt.format, &prompt.options)),
            Err(e) => eprintln!("error: {}", e),
        }
    }

    let stdin = io::stdin();
    prompt.run(&mut doc, stdin.lock(), &mut io::stdout(), &mut io::stderr())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> Args {
        Args::parse_from(std::iter::once("xpathpad").chain(argv.iter().copied()))
    }

    #[test]
    fn test_parse_namespace_binding() {
        assert_eq!(
            parse_namespace_binding("atom=http://www.w3.org/2005/Atom").unwrap(),
            ("atom".to_string(), "http://www.w3.org/2005/Atom".to_string())
        );
        // Only the first '=' separates prefix from uri
        assert_eq!(
            parse_namespace_binding("q=urn:x?a=b").unwrap(),
            ("q".to_string(), "urn:x?a=b".to_string())
        );
    }

    #[test]
    fn test_invalid_namespace_bindings() {
        for binding in ["atom", "=urn:x", "atom=", "a b=urn:x"] {
            let err = parse_namespace_binding(binding).unwrap_err();
            assert!(err.contains("expected prefix=uri"), "{}: {}", binding, err);
        }
    }

    #[test]
    fn test_select_source() {
        assert_eq!(select_source(&args(&["books.xml", "--sample"]), true), Some(Source::File));
        assert_eq!(select_source(&args(&["--sample"]), false), Some(Source::Sample));
        assert_eq!(select_source(&args(&["-x", "//book"]), false), Some(Source::Stdin));
        assert_eq!(select_source(&args(&["-x", "//book"]), true), None);
    }

    #[test]
    fn test_cli_defaults() {
        let parsed = args(&["books.xml", "-x", "//book"]);
        assert_eq!(parsed.output, "report");
        assert_eq!(parsed.indent, 4);
        assert!(!parsed.interactive);
        assert!(parsed.namespaces.is_empty());
    }

    #[test]
    fn test_repeated_namespace_flags() {
        let parsed = args(&["-N", "a=urn:a", "--namespace", "b=urn:b", "--sample"]);
        assert_eq!(parsed.namespaces, vec!["a=urn:a", "b=urn:b"]);
    }

    #[test]
    fn test_run_rejects_unknown_format() {
        let err = run(args(&["--sample", "-x", "//book", "-o", "gcc"])).unwrap_err();
        assert!(err.to_string().starts_with("invalid format 'gcc'"));
    }

    #[test]
    fn test_run_rejects_bad_binding() {
        let err = run(args(&["--sample", "-x", "//book", "-N", "oops"])).unwrap_err();
        assert!(err.to_string().contains("expected prefix=uri"));
    }

    #[test]
    fn test_run_reports_query_errors() {
        let err = run(args(&["--sample", "-x", "//book["])).unwrap_err();
        assert!(err.to_string().starts_with("Failed to compile XPath"));
    }

    #[test]
    fn test_run_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.xml");
        let err = run(args(&[path.to_str().unwrap(), "-x", "//book"])).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read file"));
    }
}
