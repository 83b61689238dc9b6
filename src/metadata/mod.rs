//! Metadata module
//!
//! This module defines the ordered key-value mapping returned by extraction,
//! along with the names of the special keys that every unfiltered result
//! carries.

mod mapping;

pub use mapping::Metadata;

/// Key holding the `lang` attribute of the root `<html>` element
pub const LANG: &str = "lang";

/// Key holding the text of the first `<title>` element
pub const TITLE: &str = "title";

/// Key holding the resolved favicon URL
pub const FAVICON: &str = "favicon";

/// Key holding the resolved apple-touch-icon URL
pub const APPLE_TOUCH_ICON: &str = "apple-touch-icon";
