//! Chunk names and chunk contents.

use std::fmt;

use super::line::Line;
use crate::text_location::TextLocation;

/// The name of a chunk, as written between `<<` and `>>`.
///
/// Names may contain spaces (`<<read the input>>`); they are compared
/// literally.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChunkName(String);

impl ChunkName {
    /// Creates a new ChunkName from a string.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Derives a deterministic anchor id from the name: lowercase, with
    /// whitespace runs joined by hyphens.
    pub fn slug(&self) -> String {
        self.0
            .split_whitespace()
            .map(|word| word.to_lowercase())
            .collect::<Vec<_>>()
            .join("-")
    }
}

impl fmt::Display for ChunkName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ChunkName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ChunkName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ChunkName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A named, ordered sequence of lines.
///
/// `name == None` denotes the root prose chunk, which interleaves
/// documentation with `ChunkBegin` markers and is never a tangle target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// The chunk name; `None` for the root prose chunk.
    pub name: Option<ChunkName>,
    /// Language tag declared with the chunk (`<<syntax:name>>=`).
    pub syntax: Option<String>,
    /// Source line at which the chunk was opened.
    pub location: TextLocation,
    /// Lines in source order.
    pub lines: Vec<Line>,
}

impl Chunk {
    /// Creates an empty named chunk.
    pub fn named(name: ChunkName, syntax: Option<String>, location: TextLocation) -> Self {
        Self {
            name: Some(name),
            syntax,
            location,
            lines: Vec::new(),
        }
    }

    /// Creates the root prose chunk.
    pub fn root() -> Self {
        Self {
            name: None,
            syntax: None,
            location: TextLocation::default(),
            lines: Vec::new(),
        }
    }

    /// Returns true if this is the root prose chunk.
    pub fn is_root(&self) -> bool {
        self.name.is_none()
    }

    /// Appends a line to the chunk.
    pub fn push(&mut self, line: Line) {
        self.lines.push(line);
    }

    /// Iterates over the chunk's lines in source order.
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter()
    }

    /// Returns the number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if the chunk holds no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
