use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GistError {
    #[error("Can't find {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Could not reach the gist service: {0}")]
    UnreachableService(#[from] reqwest::Error),

    #[error("Gist not found: {0}")]
    NotFound(String),

    #[error("Unexpected response from the gist service (HTTP {0})")]
    UnexpectedResponse(u16),

    #[error("Malformed configuration: {0}")]
    MalformedConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GistError>;
