//! The parsed chunk graph.

use indexmap::IndexMap;

use super::chunk::{Chunk, ChunkName};
use super::line::Line;

/// The parse result: the root prose chunk plus named chunks keyed by name,
/// in declaration order.
///
/// A document is built in a single pass by the reader and handed read-only
/// to the tangle and weave engines. Reference targets are resolved lazily at
/// expansion time, so chunks may be declared in any order, including after
/// the references that use them.
#[derive(Debug, Clone)]
pub struct Document {
    /// The root prose chunk (prose interleaved with `ChunkBegin` markers).
    root: Chunk,
    /// Named chunks in declaration order.
    chunks: IndexMap<ChunkName, Chunk>,
    /// Default syntax tag from the first-line directive, if any.
    pub syntax: Option<String>,
    /// Encoding named by the first-line directive, if any.
    pub encoding: Option<String>,
}

impl Document {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self {
            root: Chunk::root(),
            chunks: IndexMap::new(),
            syntax: None,
            encoding: None,
        }
    }

    /// Returns the root prose chunk.
    pub fn root(&self) -> &Chunk {
        &self.root
    }

    /// Appends a line to the root flow.
    pub fn push_root(&mut self, line: Line) {
        self.root.push(line);
    }

    /// Inserts a named chunk. Re-declaring a name replaces its content; the
    /// chunk keeps its original position in declaration order.
    pub fn insert(&mut self, chunk: Chunk) {
        let name = chunk
            .name
            .clone()
            .expect("only named chunks go into the chunk map");
        self.chunks.insert(name, chunk);
    }

    /// Looks up a named chunk.
    pub fn get(&self, name: &ChunkName) -> Option<&Chunk> {
        self.chunks.get(name)
    }

    /// Checks whether a chunk with the given name exists.
    pub fn contains(&self, name: &ChunkName) -> bool {
        self.chunks.contains_key(name)
    }

    /// Iterates over named chunks in declaration order.
    pub fn chunks(&self) -> impl Iterator<Item = &Chunk> {
        self.chunks.values()
    }

    /// Iterates over chunk names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &ChunkName> {
        self.chunks.keys()
    }

    /// Returns the number of named chunks.
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Returns true if the document declares no named chunks.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text_location::TextLocation;

    fn chunk_with_line(name: &str, text: &str) -> Chunk {
        let mut chunk = Chunk::named(ChunkName::new(name), None, TextLocation::default());
        chunk.push(Line::code(text, TextLocation::default()));
        chunk
    }

    #[test]
    fn test_insert_and_get() {
        let mut doc = Document::new();
        doc.insert(chunk_with_line("main", "print('hello')"));

        let chunk = doc.get(&ChunkName::new("main")).unwrap();
        assert_eq!(chunk.len(), 1);
        assert!(doc.contains(&ChunkName::new("main")));
        assert!(!doc.contains(&ChunkName::new("other")));
    }

    #[test]
    fn test_declaration_order() {
        let mut doc = Document::new();
        doc.insert(chunk_with_line("c", "third"));
        doc.insert(chunk_with_line("a", "first"));
        doc.insert(chunk_with_line("b", "second"));

        let names: Vec<_> = doc.names().map(|n| n.as_str()).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_redeclare_replaces() {
        let mut doc = Document::new();
        doc.insert(chunk_with_line("main", "old"));
        doc.insert(chunk_with_line("other", "keep"));
        doc.insert(chunk_with_line("main", "new"));

        assert_eq!(doc.len(), 2);
        let chunk = doc.get(&ChunkName::new("main")).unwrap();
        assert_eq!(chunk.lines[0].source_text(), "new");

        // Replacement keeps the original declaration position.
        let names: Vec<_> = doc.names().map(|n| n.as_str()).collect();
        assert_eq!(names, vec!["main", "other"]);
    }
}
