//! Weave algorithm: rendering a document as human-readable markup.

mod markdown;

pub use markdown::MarkdownFormatter;

use std::collections::VecDeque;

use crate::model::{Chunk, Document, Line, OutputLine};

/// Renders chunk declarations into output lines.
///
/// A formatter is a pure function of the chunk and its effective syntax tag;
/// the weave engine never branches on tag strings itself. New output
/// dialects implement this trait.
pub trait Formatter {
    /// Renders one chunk declaration.
    fn render(&self, chunk: &Chunk, syntax: Option<&str>) -> Vec<OutputLine>;
}

/// Weaves the document: walks the root section in source order, passing
/// prose through and rendering each chunk at the point it was declared.
///
/// Chunks are shown verbatim, references unexpanded: weaving documents the
/// structure, tangling builds the artifact. The effective syntax tag is the
/// chunk's declared tag, falling back to the document directive's tag, then
/// to `default_syntax`, then bare.
pub fn weave<'a>(
    doc: &'a Document,
    formatter: &'a dyn Formatter,
    default_syntax: Option<&'a str>,
) -> Weave<'a> {
    tracing::debug!(chunks = doc.len(), "weaving");
    Weave {
        doc,
        formatter,
        default_syntax,
        root: doc.root().lines.iter(),
        pending: VecDeque::new(),
    }
}

/// Streaming weave rendering.
///
/// There is no undefined-chunk failure path here: `ChunkBegin` markers are
/// only recorded for chunks the parser actually opened.
pub struct Weave<'a> {
    doc: &'a Document,
    formatter: &'a dyn Formatter,
    default_syntax: Option<&'a str>,
    root: std::slice::Iter<'a, Line>,
    pending: VecDeque<OutputLine>,
}

impl<'a> Iterator for Weave<'a> {
    type Item = OutputLine;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(line) = self.pending.pop_front() {
                return Some(line);
            }

            match self.root.next()? {
                Line::Prose { text, location } => {
                    return Some(OutputLine::new(location.clone(), text.clone()));
                }
                Line::ChunkBegin { name, .. } => {
                    let Some(chunk) = self.doc.get(name) else {
                        continue;
                    };
                    let syntax = chunk
                        .syntax
                        .as_deref()
                        .or(self.doc.syntax.as_deref())
                        .or(self.default_syntax);
                    self.pending = self.formatter.render(chunk, syntax).into();
                }
                // Root flow holds only prose and chunk markers.
                _ => {}
            }
        }
    }
}
