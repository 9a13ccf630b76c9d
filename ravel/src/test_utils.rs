//! Shared test utilities.

use crate::errors::Result;
use crate::model::{tangle, ChunkName, Document};
use crate::readers::parse_document;

/// Parses a document from a string, without a file name.
pub fn parse(input: &str) -> Document {
    parse_document(input, None)
}

/// Tangles a chunk and joins the output lines with newlines.
pub fn tangle_to_string(doc: &Document, name: &str) -> Result<String> {
    let lines = tangle(doc, &ChunkName::new(name), 64)?
        .map(|line| line.map(|l| l.text))
        .collect::<Result<Vec<_>>>()?;
    Ok(lines.join("\n"))
}
