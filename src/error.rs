use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Cannot read container {}: {source}", path.display())]
    ContainerRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed container {}: {message}", path.display())]
    ContainerFormat { path: PathBuf, message: String },

    #[error("Cannot write {}: {source}", path.display())]
    StorageWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Encode error: {0}")]
    Encode(#[from] RenderError),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Manifest encode error: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error("Manifest is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
