//! Error types for feedview

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("entry record has no id field")]
    MissingEntryId,

    #[error("invalid entry id: {0}")]
    InvalidEntryId(String),

    #[error("unknown view style: {0:?}")]
    InvalidViewStyle(String),

    #[error("unknown visual style: {0:?}")]
    InvalidVisualStyle(String),

    #[error("unknown sort key: {0:?}")]
    InvalidSortKey(String),
}

/// Result type alias for feedview
pub type Result<T> = std::result::Result<T, ConfigError>;
