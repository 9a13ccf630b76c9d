//! Weave command implementation.

use std::io::Write;
use std::path::PathBuf;

use ravel::errors::Result;
use ravel::weave::{weave as weave_document, MarkdownFormatter};

use super::{load_document, open_output};

/// Options for the weave command.
#[derive(Debug, Clone)]
pub struct WeaveOptions {
    /// Input file, `-` for stdin.
    pub input: PathBuf,
    /// Output file, `-` for stdout.
    pub output: PathBuf,
    /// Default code syntax tag for chunks that declare none.
    pub syntax: Option<String>,
    /// Generate anchor links for chunk headings.
    pub add_links: bool,
    /// Error on unterminated chunks.
    pub strict: bool,
}

/// Executes the weave command.
pub fn weave(options: &WeaveOptions) -> Result<()> {
    tracing::info!("weaving");

    let doc = load_document(&options.input, options.strict)?;
    let formatter = MarkdownFormatter::new(options.add_links);

    let mut out = open_output(&options.output)?;
    for line in weave_document(&doc, &formatter, options.syntax.as_deref()) {
        writeln!(out, "{}", line.text)?;
    }
    out.flush()?;

    Ok(())
}
