use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocsError {
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DocsError>;
