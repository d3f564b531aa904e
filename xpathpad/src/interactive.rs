//! Interactive prompt: one XPath expression per line against a loaded document

use std::io::{self, BufRead, Write};

use tracing::debug;
use xpathpad_core::{
    format_results, sample::format_hints, OutputFormat, OutputOptions, XmlDocument,
};

const PROMPT: &str = "xpath> ";

/// Prompt settings
pub struct Prompt {
    pub format: OutputFormat,
    pub options: OutputOptions,
    /// Print the banner and the `xpath> ` prompt (only useful on a terminal)
    pub show_prompt: bool,
}

impl Prompt {
    /// Read expressions until EOF or `:quit`, printing results to `out`
    ///
    /// Query errors go to `err` and the loop keeps going; output already
    /// printed for earlier expressions is left alone.
    pub fn run<R, W, E>(&self, doc: &mut XmlDocument, input: R, out: &mut W, err: &mut E) -> io::Result<()>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        if self.show_prompt {
            writeln!(
                out,
                "Type an XPath expression, :hints for examples, :ns for namespaces, :quit to exit."
            )?;
        }

        let mut lines = input.lines();
        loop {
            if self.show_prompt {
                write!(out, "{}", PROMPT)?;
                out.flush()?;
            }

            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;
            let expr = line.trim();

            match expr {
                "" => continue,
                ":q" | ":quit" => break,
                ":hints" => write!(out, "{}", format_hints())?,
                ":ns" | ":namespaces" => {
                    if doc.namespaces().is_empty() {
                        writeln!(out, "(no namespaces)")?;
                    }
                    for (prefix, uri) in doc.namespaces() {
                        writeln!(out, "{}={}", prefix, uri)?;
                    }
                }
                _ => match doc.query(expr) {
                    Ok(results) => {
                        write!(out, "{}", format_results(&results, self.format, &self.options))?;
                        out.flush()?;
                    }
                    Err(e) => {
                        debug!(xpath = expr, "query failed");
                        writeln!(err, "error: {}", e)?;
                    }
                },
            }
        }

        if self.show_prompt {
            writeln!(out)?;
        }
        Ok(())
    }
}
