use thiserror::Error;

#[derive(Error, Debug)]
pub enum InSpaceError {
    #[error("API request failed: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("API returned HTTP {status} for {url}")]
    HttpStatusError { status: u16, url: String },

    #[error("Unexpected response body: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Banner rendering failed: {message}")]
    BannerError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Parse,
    Io,
    Render,
    Config,
}

impl InSpaceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            InSpaceError::NetworkError(_) | InSpaceError::HttpStatusError { .. } => {
                ErrorKind::Network
            }
            InSpaceError::ParseError(_) => ErrorKind::Parse,
            InSpaceError::IoError(_) => ErrorKind::Io,
            InSpaceError::BannerError { .. } => ErrorKind::Render,
            InSpaceError::InvalidConfigValueError { .. } => ErrorKind::Config,
        }
    }
}

pub type Result<T> = std::result::Result<T, InSpaceError>;
