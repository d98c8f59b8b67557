use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum AppError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("validation error: {0}")]
    Validation(String),
}
