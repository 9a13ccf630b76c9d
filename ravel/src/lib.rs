//! Ravel - Literate Programming Preprocessor
//!
//! This library provides the core functionality for the Ravel literate
//! programming system. It reads a single annotated document of interleaved
//! prose and named code chunks and either tangles (expands one chunk into
//! flat code) or weaves (renders the whole document as Markdown).
//!
//! # Features
//!
//! - **Tangle**: Recursively expand a named chunk, splicing referenced
//!   chunks in place with accumulated indentation
//! - **Weave**: Render prose and chunk declarations, in document order,
//!   through a pluggable formatter
//! - Per-line source positions on all output, for diagnostics and source
//!   maps
//!
//! # Example
//!
//! ```
//! use ravel::model::{tangle, ChunkName};
//! use ravel::readers::parse_document;
//!
//! let source = "<<X>>=\nhello\n@\n<<Y>>=\n  <<X>>\n@\n";
//! let doc = parse_document(source, None);
//!
//! let lines: Vec<String> = tangle(&doc, &ChunkName::new("Y"), 64)
//!     .unwrap()
//!     .map(|line| line.unwrap().text)
//!     .collect();
//! assert_eq!(lines, vec!["  hello"]);
//! ```

pub mod config;
pub mod errors;
pub mod model;
pub mod readers;
pub mod text_location;
pub mod weave;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export commonly used types
pub use config::Config;
pub use errors::{RavelError, Result};
pub use model::{tangle, Chunk, ChunkName, Document, Line, OutputLine, Tangle};
pub use readers::{parse_document, parse_document_with, ParseOptions};
pub use weave::{weave, Formatter, MarkdownFormatter, Weave};
