//! Errors raised while reading notebooks and listing directories.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why a parsed notebook has no title.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleError {
    /// The document contains no cell of type `markdown`.
    #[error("no markdown cell found")]
    NoMarkdownCell,

    /// The first markdown cell has no source lines.
    #[error("first markdown cell has an empty source")]
    EmptySource,
}

/// Errors carrying the path they concern.
#[derive(Error, Debug)]
pub enum Error {
    /// The notebook file couldn't be opened or read.
    #[error("Error reading {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    /// The notebook file isn't a JSON notebook document.
    #[error("Error reading {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The notebook parsed but yields no title.
    #[error("Error reading {}: {source}", path.display())]
    Title { path: PathBuf, source: TitleError },

    /// The target of a listing isn't a directory.
    #[error("Error: {} is not a valid directory.", path.display())]
    NotADirectory { path: PathBuf },

    /// The directory exists but couldn't be enumerated.
    #[error("Error listing {}: {source}", path.display())]
    ListDirectory { path: PathBuf, source: io::Error },
}

impl Error {
    /// The path the error concerns.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Error::Read { path, .. }
            | Error::Parse { path, .. }
            | Error::Title { path, .. }
            | Error::NotADirectory { path }
            | Error::ListDirectory { path, .. } => path,
        }
    }
}

/// Result alias for fallible crate operations.
pub type Result<T> = std::result::Result<T, Error>;
