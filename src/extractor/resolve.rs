//! Icon URL resolution

use url::Url;

/// Resolves a raw icon `href` into the value stored in the mapping
///
/// # Rules
///
/// | href | base URL | Result |
/// |------|----------|--------|
/// | empty | any | `""` |
/// | starts with `http` | any | href unchanged |
/// | relative | set | href joined onto the base |
/// | relative | unset | href unchanged |
///
/// A base URL that does not parse, or a join that fails, leaves the href
/// unchanged.
///
/// # Example
///
/// ```
/// use head_meta::extractor::resolve_icon_url;
///
/// assert_eq!(
///     resolve_icon_url("/favicon.ico", Some("https://example.com")),
///     "https://example.com/favicon.ico"
/// );
/// assert_eq!(resolve_icon_url("/favicon.ico", None), "/favicon.ico");
/// ```
pub fn resolve_icon_url(href: &str, base_url: Option<&str>) -> String {
    if href.is_empty() {
        return String::new();
    }

    if href.starts_with("http") {
        return href.to_string();
    }

    let Some(base_url) = base_url else {
        return href.to_string();
    };

    match Url::parse(base_url).and_then(|base| base.join(href)) {
        Ok(resolved) => resolved.to_string(),
        Err(e) => {
            tracing::warn!(
                "Could not resolve icon '{}' against '{}': {}",
                href,
                base_url,
                e
            );
            href.to_string()
        }
    }
}
