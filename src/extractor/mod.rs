//! Extractor module for HTML metadata
//!
//! This module turns raw HTML into a [`Metadata`](crate::Metadata) mapping:
//! - Document language and title
//! - Favicon and apple-touch-icon, resolved against a base URL
//! - Every `<meta>` element's `name`/`property` keyed content
//! - Optional allow-list filtering of the result

mod parser;
mod resolve;

pub use parser::{extract, filter_meta_tags, try_extract};
pub use resolve::resolve_icon_url;
