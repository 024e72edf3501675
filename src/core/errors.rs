use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SwipeError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("Timed out after {0:?} waiting for cats")]
    Timeout(Duration),

    #[error("Invalid batch: {0}")]
    InvalidBatch(String),

    #[error("SwipeError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for SwipeError {
    fn from(error: std::io::Error) -> Self {
        SwipeError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for SwipeError {
    fn from(error: reqwest::Error) -> Self {
        SwipeError::Reqwest(Box::new(error))
    }
}
