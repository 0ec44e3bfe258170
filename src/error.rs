use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub(crate) type Result<T> = std::result::Result<T, EditorError>;

#[derive(Debug, Error)]
pub(crate) enum EditorError {
    /// Bad arguments or unusable input/output directories
    #[error("configuration error: {0}")]
    Config(String),

    /// A record whose header line does not start with '@'
    #[error("malformed FASTQ {} at line {line}: {msg}", path.display())]
    MalformedInput {
        path: PathBuf,
        line: usize,
        msg: String,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl EditorError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        EditorError::Io { path: path.into(), source }
    }
}
