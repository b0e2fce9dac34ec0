//! Unified error types for the checksum engine
//!
//! The engine itself returns [`ChecksumError`]. Presentation surfaces (FFI,
//! CLI) convert it into the serializable [`ApiError`] envelope.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors raised by the mnemonic checksum engine.
///
/// Every variant is a local validation failure on fully known input, so none
/// of them is retryable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChecksumError {
    #[error("Invalid entropy length: {bits} bits (expected 128, 160, 192, 224 or 256)")]
    InvalidLength { bits: usize },

    #[error("Invalid word count: {0} (expected 12, 15, 18, 21 or 24)")]
    InvalidWordCount(usize),

    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    #[error("Word '{word}' at position {position} is not in the BIP-39 word list")]
    UnknownWord { word: String, position: usize },

    #[error("Malformed mnemonic: {0}")]
    MalformedMnemonic(String),

    #[error("Invalid binary string: {0}")]
    InvalidBinary(String),

    #[error("Invalid wordlist: {0}")]
    InvalidWordlist(String),
}

impl ChecksumError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ChecksumError::InvalidLength { .. } => ErrorCode::InvalidLength,
            ChecksumError::InvalidWordCount(_) => ErrorCode::InvalidWordCount,
            ChecksumError::InvalidHex(_) => ErrorCode::InvalidHex,
            ChecksumError::UnknownWord { .. } => ErrorCode::UnknownWord,
            ChecksumError::MalformedMnemonic(_) => ErrorCode::MalformedMnemonic,
            ChecksumError::InvalidBinary(_) => ErrorCode::InvalidBinary,
            ChecksumError::InvalidWordlist(_) => ErrorCode::InvalidWordlist,
        }
    }
}

/// Result type alias for engine operations
pub type ChecksumResult<T> = Result<T, ChecksumError>;

impl From<hex::FromHexError> for ChecksumError {
    fn from(e: hex::FromHexError) -> Self {
        ChecksumError::InvalidHex(e.to_string())
    }
}

/// Serializable error envelope handed to presentation layers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, msg)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::Internal, msg)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)?;
        if let Some(ref details) = self.details {
            write!(f, " ({})", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

/// Error codes for categorization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    // Engine errors
    InvalidLength,
    InvalidWordCount,
    InvalidHex,
    UnknownWord,
    MalformedMnemonic,
    InvalidBinary,
    InvalidWordlist,

    // Surface errors
    InvalidInput,
    JsonError,

    // Internal
    Internal,
}

impl From<ChecksumError> for ApiError {
    fn from(e: ChecksumError) -> Self {
        let api = ApiError::new(e.code(), e.to_string());
        match e {
            ChecksumError::UnknownWord { word, position } => {
                api.with_details(format!("word={} position={}", word, position))
            }
            _ => api,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::new(ErrorCode::JsonError, e.to_string())
    }
}
