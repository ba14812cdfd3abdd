use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("parse DDL failed: {0}")]
    ParseFailure(String),

    #[error("file {0} already exists!")]
    NameCollision(String),

    #[error("No target selected. Please select a file or folder with --target")]
    MissingTarget,

    #[error("Invalid file name: {0}")]
    InvalidFileName(String),

    #[error("Invalid JSON sample: {0}")]
    InvalidJson(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Prompt error: {0}")]
    Prompt(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GenError>;
