use std::fmt;

#[derive(Debug)]
pub enum AppError {
    /// Code resolution found no matching row
    NotFound(String),
    /// Assessment-range token is malformed
    InvalidFormat(String),
    /// Network request failed (connection, timeout)
    Transport(String),
    /// Portal answered with a non-success status
    BadStatus { status: u16, body: String },
    /// Response body could not be decoded as markup
    ParseFailure(String),
    /// Invalid input format
    InvalidInput(String),
    /// IO operation failed
    IoError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {msg}"),
            AppError::InvalidFormat(msg) => write!(f, "Invalid format: {msg}"),
            AppError::Transport(msg) => write!(f, "Transport error: {msg}"),
            AppError::BadStatus { status, body } => {
                write!(f, "Bad status: {status}, Body: {body}")
            }
            AppError::ParseFailure(msg) => write!(f, "Parse failure: {msg}"),
            AppError::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            AppError::IoError(msg) => write!(f, "IO error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

// Conversion implementations for common errors
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Transport(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err.to_string())
    }
}

// Custom type alias for Results in this application
pub type AppResult<T> = Result<T, AppError>;
