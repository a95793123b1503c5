use thiserror::Error;

pub type Result<T> = std::result::Result<T, OrglocError>;

#[derive(Error, Debug)]
pub enum OrglocError {
    #[error("Required tool not installed: {0}")]
    ToolMissing(String),
    #[error("Repository listing failed: {0}")]
    Listing(String),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Thread pool error: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),
    #[error("Counting task panicked: {0}")]
    TaskPanic(String),
}
