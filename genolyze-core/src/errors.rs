use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenolyzeError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Invalid file format: {0}")]
    FileFormatError(String),

    #[error("Parse error on line {line}: {message}")]
    ParseError { line: usize, message: String },

    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for GenolyzeError {
    fn from(err: toml::de::Error) -> Self {
        GenolyzeError::Config(err.to_string())
    }
}

/// Result type alias for genolyze operations.
pub type Result<T> = std::result::Result<T, GenolyzeError>;
