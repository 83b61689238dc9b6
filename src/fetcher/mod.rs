//! Fetcher module for URL-based extraction
//!
//! This module retrieves HTML over HTTP and hands it to the extractor:
//! - Building HTTP clients with a proper user agent string
//! - Racing the request against an optional timeout
//! - Classifying failures, which all surface as `None`

mod http;

pub use http::{build_http_client, fetch_and_extract, FetchResult, Fetcher};
