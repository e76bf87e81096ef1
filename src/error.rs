use thiserror::Error;

#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Request error: {0}")]
    Request(String),
    #[error("HTTP {status} from {endpoint}")]
    Status { endpoint: String, status: u16 },
    #[error("Response error: {0}")]
    Response(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Event binding error: {0}")]
    Binding(String),
}

impl From<serde_json::Error> for GalleryError {
    fn from(e: serde_json::Error) -> Self {
        GalleryError::Serialization(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GalleryError>;
