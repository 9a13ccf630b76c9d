//! Error types for the Ravel system.

use thiserror::Error;

use crate::model::ChunkName;
use crate::text_location::TextLocation;

/// Main error type for Ravel operations.
#[derive(Error, Debug)]
pub enum RavelError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("undefined chunk <<{name}>> referenced at {location}")]
    UndefinedChunk {
        name: ChunkName,
        location: TextLocation,
    },

    #[error("no chunk named <<{0}>> to tangle")]
    NoSuchTangleTarget(ChunkName),

    #[error("expansion depth limit of {depth} exceeded at <<{name}>> ({location}); cyclic references?")]
    ExpansionDepthExceeded {
        name: ChunkName,
        depth: usize,
        location: TextLocation,
    },

    #[error("chunk <<{name}>> opened at {location} is never closed")]
    UnterminatedChunk {
        name: ChunkName,
        location: TextLocation,
    },
}

/// Result type alias for Ravel operations.
pub type Result<T> = std::result::Result<T, RavelError>;
