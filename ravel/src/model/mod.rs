//! Core model types for Ravel.

mod chunk;
mod document;
mod line;
mod tangle;

pub use chunk::{Chunk, ChunkName};
pub use document::Document;
pub use line::{Line, OutputLine};
pub use tangle::{tangle, Tangle};
