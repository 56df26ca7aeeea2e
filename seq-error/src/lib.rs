use std::io;
use std::sync::Arc;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SeqError>;

/// Errors produced by sequences and line collections.
///
/// Every variant is terminal for the sequence that reports it: the same
/// error is handed back on each later pull, which is why the type is
/// `Clone` and keeps I/O errors behind an `Arc`.
#[derive(Error, Debug, Clone)]
pub enum SeqError {
    #[error("IO error: {0}")]
    Io(Arc<io::Error>),
    #[error("Index {index} is out of range for {count} lines")]
    IndexOutOfRange { index: usize, count: usize },
    #[error("Burn map is full ({capacity} values)")]
    CapacityExhausted { capacity: usize },
    #[error("Cannot draw from an empty collection")]
    EmptyCollection,
}

impl SeqError {
    /// The underlying I/O error kind, if this is a source error.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Self::Io(err) => Some(err.kind()),
            _ => None,
        }
    }
}

impl From<io::Error> for SeqError {
    fn from(e: io::Error) -> Self {
        Self::Io(Arc::new(e))
    }
}
