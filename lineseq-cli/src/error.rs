use std::io;
use std::path::PathBuf;

use seq_error::SeqError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Could not write output: {0}")]
    OutputError(#[from] io::Error),

    #[error(transparent)]
    SeqError(#[from] SeqError),
}
