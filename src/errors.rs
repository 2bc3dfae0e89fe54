use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// The caller did not supply a municipality query
    #[error("Missing 'municipality' parameter")]
    MissingParameter,
    /// Neither the remote catalog nor the static table matched the query
    #[error("No municipality found for '{0}'")]
    MunicipalityNotFound(String),
    /// No live data and no mock record for the resolved municipality
    #[error("Demographic data unavailable for '{0}'")]
    DataUnavailable(String),
    /// Network request failed
    #[error("Network error: {0}")]
    NetworkError(String),
    /// Failed to decode a gateway response
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Invalid URL format
    #[error("Invalid URL: {0}")]
    UrlError(String),
    /// Invalid input format
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// IO operation failed
    #[error("IO error: {0}")]
    IoError(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::NetworkError(err.to_string())
    }
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        AppError::UrlError(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err.to_string())
    }
}

// Custom type alias for Results in this application
pub type AppResult<T> = Result<T, AppError>;
