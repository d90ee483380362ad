use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Reasons a set of [`ConcatParams`](crate::ConcatParams) is rejected before any I/O.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationFailure {
    #[error("output file required")]
    OutputFileRequired,
    #[error("competing input modes: set either a file list or a directory, not both")]
    CompetingInputModes,
    #[error("no input specified: set a file list or a directory")]
    NoInputSpecified,
    #[error("starting file only valid with directory mode")]
    StartingFileWithoutDirectory,
    #[error("directory does not exist: {}", .0.display())]
    DirectoryMissing(PathBuf),
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

#[derive(Error, Debug)]
pub enum ConcatError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationFailure),

    /// Filesystem failure while listing, reading, deleting or writing.
    /// The output file may already hold part of the result.
    #[error("I/O error accessing '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file '{}': {message}", .path.display())]
    Config { path: PathBuf, message: String },
}

impl ConcatError {
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        ConcatError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ConcatError::Validation(_))
    }

    pub fn validation_failure(&self) -> Option<&ValidationFailure> {
        match self {
            ConcatError::Validation(reason) => Some(reason),
            _ => None,
        }
    }
}
