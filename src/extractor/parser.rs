//! HTML parser for extracting page metadata
//!
//! This module handles parsing HTML content to extract:
//! - The `lang` attribute of the root element
//! - The page title (from the first `<title>` tag)
//! - Favicon and apple-touch-icon links
//! - Every `<meta name="...">` and `<meta property="...">` value

use crate::config::ExtractOptions;
use crate::extractor::resolve::resolve_icon_url;
use crate::metadata::{self, Metadata};
use crate::{MetaError, Result};
use scraper::{ElementRef, Html, Selector};

const TITLE_SELECTOR: &str = "title";
const FAVICON_SELECTOR: &str = "link[rel*='icon']";
const APPLE_TOUCH_ICON_SELECTOR: &str = "link[rel*='apple-touch-icon']";
const META_SELECTOR: &str = "meta";

/// Extracts metadata from an HTML string
///
/// Never fails: an internal error is logged and yields an empty mapping.
/// See [`try_extract`] for the extraction rules.
///
/// # Example
///
/// ```
/// use head_meta::{extract, ExtractOptions};
///
/// let html = r#"<html lang="en"><head>
///     <title>Hello</title>
///     <link rel="icon" href="/favicon.ico">
///     <meta property="og:title" content="Hello World">
/// </head></html>"#;
///
/// let options = ExtractOptions::new().with_base_url("https://example.com");
/// let metadata = extract(html, &options);
///
/// assert_eq!(metadata.get("lang"), Some("en"));
/// assert_eq!(metadata.get("favicon"), Some("https://example.com/favicon.ico"));
/// assert_eq!(metadata.get("og:title"), Some("Hello World"));
/// ```
pub fn extract(html: &str, options: &ExtractOptions) -> Metadata {
    match try_extract(html, options) {
        Ok(metadata) => metadata,
        Err(e) => {
            tracing::error!("Metadata extraction failed: {}", e);
            Metadata::new()
        }
    }
}

/// Extracts metadata from an HTML string, reporting internal errors
///
/// # Extraction Rules
///
/// 1. `lang`, `title`, `favicon` and `apple-touch-icon` are inserted first,
///    defaulting to `""`
/// 2. `favicon` is the first `<link>` whose `rel` contains `icon`;
///    `apple-touch-icon` is the first whose `rel` contains `apple-touch-icon`
/// 3. Icon hrefs are resolved with [`resolve_icon_url`] against
///    `options.base_url`
/// 4. Each `<meta>` in document order sets `output[name]` and
///    `output[property]` to its `content` (or `""`)
/// 5. When `options.meta_tags` is set, the result is passed through
///    [`filter_meta_tags`]
///
/// Malformed markup is parsed leniently and never causes an error.
///
/// # Returns
///
/// * `Ok(Metadata)` - The extracted mapping
/// * `Err(MetaError)` - A selector failed to compile
pub fn try_extract(html: &str, options: &ExtractOptions) -> Result<Metadata> {
    let document = Html::parse_document(html);
    let base_url = options.base_url.as_deref();

    let mut output = Metadata::new();
    output.insert(metadata::LANG, extract_lang(&document));
    output.insert(metadata::TITLE, extract_title(&document)?);

    let favicon = first_href(&document, FAVICON_SELECTOR)?;
    output.insert(metadata::FAVICON, resolve_icon_url(&favicon, base_url));

    let apple_touch_icon = first_href(&document, APPLE_TOUCH_ICON_SELECTOR)?;
    output.insert(
        metadata::APPLE_TOUCH_ICON,
        resolve_icon_url(&apple_touch_icon, base_url),
    );

    extract_meta_tags(&document, &mut output)?;

    tracing::debug!("Extracted {} metadata entries", output.len());

    Ok(match &options.meta_tags {
        Some(meta_tags) => filter_meta_tags(&output, meta_tags),
        None => output,
    })
}

/// Restricts a mapping to the allow-listed keys that have a non-empty value
///
/// The result follows the order of `meta_tags`. Keys missing from `raw`, or
/// present with an empty value, are omitted.
pub fn filter_meta_tags(raw: &Metadata, meta_tags: &[String]) -> Metadata {
    let mut filtered = Metadata::new();

    for tag in meta_tags {
        if filtered.contains_key(tag) {
            continue;
        }

        if let Some(value) = raw.get(tag).filter(|v| !v.is_empty()) {
            filtered.insert(tag.as_str(), value);
        }
    }

    filtered
}

fn selector(source: &str) -> Result<Selector> {
    Selector::parse(source).map_err(|e| MetaError::Selector {
        selector: source.to_string(),
        message: format!("{:?}", e),
    })
}

/// Extracts the `lang` attribute of the root element
fn extract_lang(document: &Html) -> String {
    document
        .root_element()
        .value()
        .attr("lang")
        .unwrap_or_default()
        .to_string()
}

/// Extracts the text content of the first `<title>` element
fn extract_title(document: &Html) -> Result<String> {
    let title_selector = selector(TITLE_SELECTOR)?;

    Ok(document
        .select(&title_selector)
        .next()
        .map(|element| element.text().collect::<String>())
        .unwrap_or_default())
}

/// Returns the `href` of the first element matching `source`, or `""`
fn first_href(document: &Html, source: &str) -> Result<String> {
    let link_selector = selector(source)?;

    Ok(document
        .select(&link_selector)
        .next()
        .and_then(|element| element.value().attr("href"))
        .unwrap_or_default()
        .to_string())
}

/// Inserts every `<meta>` element's `name` and `property` keys
fn extract_meta_tags(document: &Html, output: &mut Metadata) -> Result<()> {
    let meta_selector = selector(META_SELECTOR)?;

    for element in document.select(&meta_selector) {
        let content = element.value().attr("content").unwrap_or_default();

        for key in meta_keys(&element) {
            output.insert(key, content);
        }
    }

    Ok(())
}

/// Returns the non-empty `name` and `property` values of a meta element
fn meta_keys<'a>(element: &ElementRef<'a>) -> impl Iterator<Item = &'a str> {
    let value = element.value();
    [value.attr("name"), value.attr("property")]
        .into_iter()
        .flatten()
        .filter(|key| !key.is_empty())
}
