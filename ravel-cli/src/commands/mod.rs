//! CLI command implementations.

mod tangle;
mod weave;

pub use tangle::{tangle, TangleOptions};
pub use weave::{weave, WeaveOptions};

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use ravel::errors::Result;
use ravel::model::Document;
use ravel::readers::{parse_document_with, ParseOptions};

/// Reads the input document; `-` means stdin.
fn read_input(path: &Path) -> io::Result<String> {
    if path == Path::new("-") {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(path)
    }
}

/// Opens the output sink; `-` means stdout.
fn open_output(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        Ok(Box::new(io::BufWriter::new(io::stdout())))
    } else {
        Ok(Box::new(io::BufWriter::new(File::create(path)?)))
    }
}

/// Reads and parses the input document.
fn load_document(input: &Path, strict: bool) -> Result<Document> {
    let text = read_input(input)?;
    let source = (input != Path::new("-")).then_some(input);
    let doc = parse_document_with(&text, source, &ParseOptions { strict })?;

    // Decoding is fixed at UTF-8; a directive asking for anything else is
    // honored only with a warning.
    if let Some(encoding) = doc.encoding.as_deref() {
        if !encoding.eq_ignore_ascii_case("utf-8") && !encoding.eq_ignore_ascii_case("utf8") {
            tracing::warn!(encoding, "unsupported encoding requested; using UTF-8");
        }
    }

    Ok(doc)
}
