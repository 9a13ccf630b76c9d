//! Parsed input lines and emitted output records.

use super::chunk::ChunkName;
use crate::text_location::TextLocation;

/// One classified line of input.
///
/// Named chunks hold `Code` and `Reference` lines; the root section holds
/// `Prose` and `ChunkBegin` lines. `ChunkEnd` only appears transiently while
/// parsing: its trailing text re-enters the root flow as prose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// Documentation text in the root section.
    Prose {
        text: String,
        location: TextLocation,
    },

    /// A literal content line inside a named chunk.
    Code {
        text: String,
        location: TextLocation,
    },

    /// A chunk definition marker (`<<name>>=`), recorded in the root flow
    /// so weave can render the chunk where it was declared.
    ChunkBegin {
        name: ChunkName,
        syntax: Option<String>,
        location: TextLocation,
    },

    /// An invocation of another chunk (`<<name>>`), with the whitespace
    /// captured before the marker.
    Reference {
        name: ChunkName,
        indent: String,
        location: TextLocation,
    },

    /// A chunk end marker (`@`), optionally followed by trailing prose.
    ChunkEnd {
        trailing: Option<String>,
        location: TextLocation,
    },
}

impl Line {
    /// Creates a prose line.
    pub fn prose(text: impl Into<String>, location: TextLocation) -> Self {
        Self::Prose {
            text: text.into(),
            location,
        }
    }

    /// Creates a code line.
    pub fn code(text: impl Into<String>, location: TextLocation) -> Self {
        Self::Code {
            text: text.into(),
            location,
        }
    }

    /// Creates a chunk definition marker line.
    pub fn chunk_begin(
        name: impl Into<ChunkName>,
        syntax: Option<String>,
        location: TextLocation,
    ) -> Self {
        Self::ChunkBegin {
            name: name.into(),
            syntax,
            location,
        }
    }

    /// Creates a reference line.
    pub fn reference(
        name: impl Into<ChunkName>,
        indent: impl Into<String>,
        location: TextLocation,
    ) -> Self {
        Self::Reference {
            name: name.into(),
            indent: indent.into(),
            location,
        }
    }

    /// Creates a chunk end marker line.
    pub fn chunk_end(trailing: Option<String>, location: TextLocation) -> Self {
        Self::ChunkEnd { trailing, location }
    }

    /// Returns the location of this line.
    pub fn location(&self) -> &TextLocation {
        match self {
            Self::Prose { location, .. }
            | Self::Code { location, .. }
            | Self::ChunkBegin { location, .. }
            | Self::Reference { location, .. }
            | Self::ChunkEnd { location, .. } => location,
        }
    }

    /// Returns true if this is a reference line.
    pub fn is_reference(&self) -> bool {
        matches!(self, Self::Reference { .. })
    }

    /// Reproduces the line as it reads in the source document.
    ///
    /// Used by weave to show chunk bodies verbatim. Reference lines render
    /// in canonical form (`{indent}<<name>>`); an ignored syntax prefix is
    /// not preserved.
    pub fn source_text(&self) -> String {
        match self {
            Self::Prose { text, .. } | Self::Code { text, .. } => text.clone(),
            Self::Reference { name, indent, .. } => format!("{}<<{}>>", indent, name),
            Self::ChunkBegin { name, syntax, .. } => match syntax {
                Some(tag) => format!("<<{}:{}>>=", tag, name),
                None => format!("<<{}>>=", name),
            },
            Self::ChunkEnd { trailing, .. } => match trailing {
                Some(text) => format!("@ {}", text),
                None => "@".to_string(),
            },
        }
    }
}

/// One emitted output line, paired with the source line it originated from.
///
/// Both the tangle and weave engines yield these, so downstream tooling can
/// map generated lines back to the literate source exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    /// Source position of the originating line.
    pub location: TextLocation,
    /// The rendered text, without a trailing newline.
    pub text: String,
}

impl OutputLine {
    /// Creates a new output line.
    pub fn new(location: TextLocation, text: impl Into<String>) -> Self {
        Self {
            location,
            text: text.into(),
        }
    }
}
