#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Dictionary file not found: {0}")]
    FileNotFound(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
