//! Tangle command implementation.

use std::io::Write;
use std::path::PathBuf;

use ravel::errors::Result;
use ravel::model::{tangle as tangle_chunk, ChunkName};

use super::{load_document, open_output};

/// Options for the tangle command.
#[derive(Debug, Clone)]
pub struct TangleOptions {
    /// Name of the chunk to expand.
    pub chunk: String,
    /// Input file, `-` for stdin.
    pub input: PathBuf,
    /// Output file, `-` for stdout.
    pub output: PathBuf,
    /// Maximum reference nesting.
    pub max_depth: usize,
    /// Error on unterminated chunks.
    pub strict: bool,
}

/// Executes the tangle command.
///
/// Output is streamed; on failure mid-expansion, lines already written stay
/// written.
pub fn tangle(options: &TangleOptions) -> Result<()> {
    tracing::info!(chunk = %options.chunk, "tangling");

    let doc = load_document(&options.input, options.strict)?;
    let lines = tangle_chunk(&doc, &ChunkName::new(options.chunk.as_str()), options.max_depth)?;

    let mut out = open_output(&options.output)?;
    for line in lines {
        writeln!(out, "{}", line?.text)?;
    }
    out.flush()?;

    Ok(())
}
