//! Reading literate documents into the chunk graph.

mod document;
mod markers;

pub use document::{parse_document, parse_document_with, ParseOptions};
pub use markers::{parse_directive, Directive, CHUNK_DEF, CHUNK_END, CHUNK_REF, ESCAPE_PREFIX};
