//! Startup errors
//!
//! Validation never fails with an error; only loading resources can.

use crate::core::WordError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A word list or dictionary could not be turned into something playable
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read word list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("word list {} has no usable words", path.display())]
    EmptyWordList { path: PathBuf },

    #[error("no root words to start a game from")]
    NoStartWords,

    #[error("invalid root word: {0}")]
    InvalidRootWord(#[from] WordError),
}

/// Result alias for resource loading
pub type Result<T> = std::result::Result<T, LoadError>;
