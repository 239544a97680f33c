use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistraError {
    #[error("{0}")]
    Validation(String),

    #[error("No course found with ID: {0}")]
    CourseNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, RegistraError>;
