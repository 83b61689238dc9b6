//! Configuration module for Head-Meta
//!
//! This module holds the extraction options and handles loading, parsing,
//! and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use head_meta::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("head-meta.toml")).unwrap();
//! println!("Base URL: {:?}", config.extract.base_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, ExtractOptions, UserAgentConfig};

// Re-export parser functions
pub use parser::{load_config, parse_config};
