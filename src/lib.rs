//! Head-Meta: page metadata extraction
//!
//! This crate extracts a normalized key-value view of a page's `<head>`
//! metadata (title, language, icons, Open Graph, Twitter Card and generic
//! `name`/`property` meta tags) from raw HTML or from a fetched URL.

pub mod config;
pub mod extractor;
pub mod fetcher;
pub mod metadata;

use thiserror::Error;

/// Main error type for Head-Meta operations
#[derive(Debug, Error)]
pub enum MetaError {
    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Head-Meta operations
pub type Result<T> = std::result::Result<T, MetaError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::{Config, ExtractOptions};
pub use extractor::{extract, try_extract};
pub use fetcher::{fetch_and_extract, Fetcher};
pub use metadata::Metadata;
