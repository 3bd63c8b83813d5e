use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdrzError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A bundled default asset is missing. The tool cannot run without its
    /// shipped templates, so this is always fatal.
    #[error("missing bundled asset: {}", .0.display())]
    MissingAsset(PathBuf),

    /// The caller invoked a command incorrectly (e.g. empty record name).
    /// Reported as-is, without the generic error prefix.
    #[error("{0}")]
    Usage(String),

    #[error("could not resolve {0}")]
    Env(String),
}

pub type Result<T> = std::result::Result<T, AdrzError>;
