//! Single-pass parsing of literate documents into the chunk graph.

use std::path::Path;

use crate::errors::{RavelError, Result};
use crate::model::{Chunk, ChunkName, Document, Line};
use crate::text_location::TextLocation;

use super::markers::{parse_directive, CHUNK_DEF, CHUNK_END, CHUNK_REF, ESCAPE_PREFIX};

/// Options controlling parse behavior.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Error on a chunk left open at end of input instead of silently
    /// closing it.
    pub strict: bool,
}

/// Classifies one raw input line.
///
/// Recognition order: definition marker (only honored in the root section;
/// inside a chunk it is ordinary content, so documents can show the marker
/// syntax as example text), end marker, escaped marker, reference (only
/// inside a chunk), then ordinary content.
pub(crate) fn classify(raw: &str, in_chunk: bool, location: TextLocation) -> Line {
    if !in_chunk {
        if let Some(caps) = CHUNK_DEF.captures(raw) {
            let syntax = caps
                .name("syntax")
                .map(|m| m.as_str().to_string())
                .filter(|s| !s.is_empty());
            return Line::chunk_begin(&caps["name"], syntax, location);
        }
    }

    if let Some(caps) = CHUNK_END.captures(raw) {
        let trailing = caps
            .name("trailing")
            .map(|m| m.as_str())
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string);
        return Line::chunk_end(trailing, location);
    }

    if raw.starts_with(ESCAPE_PREFIX) {
        return content(&raw[1..], in_chunk, location);
    }

    if in_chunk {
        if let Some(caps) = CHUNK_REF.captures(raw) {
            return Line::reference(&caps["name"], &caps["indent"], location);
        }
    }

    content(raw, in_chunk, location)
}

fn content(text: &str, in_chunk: bool, location: TextLocation) -> Line {
    if in_chunk {
        Line::code(text, location)
    } else {
        Line::prose(text, location)
    }
}

/// Parses a document, silently closing a chunk left open at end of input
/// (the permissive historical behavior).
pub fn parse_document(input: &str, source: Option<&Path>) -> Document {
    let (doc, unterminated) = run(input, source);
    if let Some((name, location)) = unterminated {
        tracing::warn!(chunk = %name, %location, "chunk never closed; closing at end of input");
    }
    doc
}

/// Parses a document, honoring [`ParseOptions`].
///
/// With `strict` set, a chunk left open at end of input is an
/// [`RavelError::UnterminatedChunk`].
pub fn parse_document_with(
    input: &str,
    source: Option<&Path>,
    options: &ParseOptions,
) -> Result<Document> {
    let (doc, unterminated) = run(input, source);
    match unterminated {
        Some((name, location)) if options.strict => {
            Err(RavelError::UnterminatedChunk { name, location })
        }
        Some((name, location)) => {
            tracing::warn!(chunk = %name, %location, "chunk never closed; closing at end of input");
            Ok(doc)
        }
        None => Ok(doc),
    }
}

/// The `InRoot`/`InChunk` state machine. `current` doubles as the state:
/// `None` is `InRoot`, `Some(chunk)` is `InChunk`.
fn run(input: &str, source: Option<&Path>) -> (Document, Option<(ChunkName, TextLocation)>) {
    let mut doc = Document::new();
    let mut current: Option<Chunk> = None;

    for (idx, raw) in input.lines().enumerate() {
        let lineno = idx + 1;

        if lineno == 1 {
            if let Some(directive) = parse_directive(raw) {
                tracing::debug!(?directive, "first-line directive");
                doc.syntax = directive.syntax;
                doc.encoding = directive.encoding;
                continue;
            }
        }

        let location = location_at(source, lineno);

        match classify(raw, current.is_some(), location) {
            Line::ChunkBegin {
                name,
                syntax,
                location,
            } => {
                tracing::debug!(chunk = %name, line = location.line, "chunk opened");
                doc.push_root(Line::chunk_begin(
                    name.clone(),
                    syntax.clone(),
                    location.clone(),
                ));
                current = Some(Chunk::named(name, syntax, location));
            }
            Line::ChunkEnd { trailing, location } => {
                if let Some(chunk) = current.take() {
                    doc.insert(chunk);
                }
                if let Some(text) = trailing {
                    doc.push_root(Line::prose(text, location));
                }
            }
            line => match current.as_mut() {
                Some(chunk) => chunk.push(line),
                None => doc.push_root(line),
            },
        }
    }

    let unterminated = current.map(|chunk| {
        let name = chunk
            .name
            .clone()
            .expect("open chunks are always named");
        let location = chunk.location.clone();
        doc.insert(chunk);
        (name, location)
    });

    (doc, unterminated)
}

fn location_at(source: Option<&Path>, line: usize) -> TextLocation {
    TextLocation::new(source.map(Path::to_path_buf), line)
}
