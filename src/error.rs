use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FirError {
    #[error("input file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("malformed WAV file: {0}")]
    MalformedHeader(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("filter design failed: {0}")]
    FilterDesign(String),

    #[error("WAV I/O error: {0}")]
    Wav(#[from] hound::Error),
}

pub type Result<T> = std::result::Result<T, FirError>;
