// errors.rs
use crate::dataset::LoadError;
use std::fmt;

/// Errors originating from either the server logic
/// (routing, bad query strings) or downstream layers (dataset, spreadsheets).
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    BadRequest(String),
    DataError(String),
    InternalError,
    XlsxError(String),
    ConfigError(String),
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            ServerError::DataError(msg) => write!(f, "Dataset Error: {msg}"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
            ServerError::XlsxError(msg) => write!(f, "Spreadsheet Error: {msg}"),
            ServerError::ConfigError(msg) => write!(f, "Configuration Error: {msg}"),
        }
    }
}

impl std::error::Error for ServerError {}

impl From<LoadError> for ServerError {
    fn from(err: LoadError) -> Self {
        ServerError::DataError(err.to_string())
    }
}
