use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Stream(#[from] stream::Error),

    #[error("UTF-8 error: {0}")]
    Utf8(#[from] utf8::Error),

    #[error("UTF-16 error: {0}")]
    Utf16(#[from] utf16::Error),

    #[error("transcode error: {0}")]
    Transcode(#[from] transcode::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yml::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, Error>;
