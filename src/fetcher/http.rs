//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests, including:
//! - Building HTTP clients with proper user agent strings
//! - GET requests to fetch page content
//! - The timeout race
//! - Error classification

use crate::config::{ExtractOptions, UserAgentConfig};
use crate::extractor::extract;
use crate::metadata::Metadata;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Result of a fetch operation
#[derive(Debug)]
pub enum FetchResult {
    /// Successfully fetched the page
    Success {
        /// Final URL after redirects
        final_url: String,
        /// HTTP status code
        status_code: u16,
        /// Page body content
        body: String,
    },

    /// The URL was not a well-formed absolute HTTP(S) URL; nothing was sent
    InvalidUrl {
        /// Error description
        error: String,
    },

    /// The timeout fired before the response body was read
    Timeout,

    /// The server answered with a non-success status
    HttpError {
        /// The HTTP status code
        status_code: u16,
    },

    /// Network error (DNS, connection refused, TLS, body read)
    NetworkError {
        /// Error description
        error: String,
    },
}

/// Formats the user agent string: `Name/Version (+ContactURL)`
fn format_user_agent(config: &UserAgentConfig) -> String {
    if config.contact_url.is_empty() {
        format!("{}/{}", config.crawler_name, config.crawler_version)
    } else {
        format!(
            "{}/{} (+{})",
            config.crawler_name, config.crawler_version, config.contact_url
        )
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The user agent configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use head_meta::config::UserAgentConfig;
/// use head_meta::fetcher::build_http_client;
///
/// let config = UserAgentConfig {
///     crawler_name: "HeadMeta".to_string(),
///     crawler_version: "1.0".to_string(),
///     contact_url: "https://example.com/about".to_string(),
/// };
///
/// let client = build_http_client(&config).unwrap();
/// ```
pub fn build_http_client(config: &UserAgentConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(format_user_agent(config))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches pages and extracts their metadata
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Creates a fetcher whose client identifies itself with `config`
    pub fn new(config: &UserAgentConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(config)?,
        })
    }

    /// Creates a fetcher around an existing client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Fetches a URL and extracts its metadata
    ///
    /// # Request Flow
    ///
    /// 1. Reject anything that is not an absolute HTTP(S) URL
    /// 2. Send a GET request, raced against `options.timeout` when set
    /// 3. Read the body of a 2xx response
    /// 4. Extract with `options.base_url` defaulting to `url`
    ///
    /// # Returns
    ///
    /// * `Some(Metadata)` - The page was fetched and extracted
    /// * `None` - Invalid URL, timeout, network failure, or non-2xx status
    pub async fn fetch_and_extract(&self, url: &str, options: &ExtractOptions) -> Option<Metadata> {
        match self.fetch_html(url, options.timeout).await {
            FetchResult::Success {
                final_url,
                status_code,
                body,
            } => {
                tracing::debug!(
                    "Fetched {} ({}, {} bytes) from {}",
                    url,
                    status_code,
                    body.len(),
                    final_url
                );

                let mut options = options.clone();
                if options.base_url.is_none() {
                    options.base_url = Some(url.to_string());
                }

                Some(extract(&body, &options))
            }
            FetchResult::InvalidUrl { error } => {
                tracing::debug!("Invalid URL '{}': {}", url, error);
                None
            }
            FetchResult::Timeout => {
                tracing::warn!("Request timeout for {}", url);
                None
            }
            FetchResult::HttpError { status_code } => {
                tracing::warn!("HTTP {} for {}", status_code, url);
                None
            }
            FetchResult::NetworkError { error } => {
                tracing::warn!("Network error for {}: {}", url, error);
                None
            }
        }
    }

    /// Fetches a URL and classifies the outcome
    ///
    /// When `timeout` is set and fires first, the in-flight request is
    /// dropped and its result is never observed.
    pub async fn fetch_html(&self, url: &str, timeout: Option<Duration>) -> FetchResult {
        let parsed = match Url::parse(url) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => parsed,
            Ok(parsed) => {
                return FetchResult::InvalidUrl {
                    error: format!("unsupported scheme '{}'", parsed.scheme()),
                }
            }
            Err(e) => {
                return FetchResult::InvalidUrl {
                    error: e.to_string(),
                }
            }
        };

        match timeout {
            Some(limit) => tokio::time::timeout(limit, self.get(parsed))
                .await
                .unwrap_or(FetchResult::Timeout),
            None => self.get(parsed).await,
        }
    }

    async fn get(&self, url: Url) -> FetchResult {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => return classify_error(e),
        };

        let status = response.status();
        let final_url = response.url().to_string();

        if !status.is_success() {
            return FetchResult::HttpError {
                status_code: status.as_u16(),
            };
        }

        match response.text().await {
            Ok(body) => FetchResult::Success {
                final_url,
                status_code: status.as_u16(),
                body,
            },
            Err(e) => classify_error(e),
        }
    }
}

/// Maps a transport error onto a fetch result
fn classify_error(e: reqwest::Error) -> FetchResult {
    let error = if e.is_timeout() {
        "Request timeout".to_string()
    } else if e.is_connect() {
        format!("Connection failed: {}", e)
    } else {
        e.to_string()
    };

    FetchResult::NetworkError { error }
}

/// Fetches a URL with a default client and extracts its metadata
///
/// See [`Fetcher::fetch_and_extract`].
pub async fn fetch_and_extract(url: &str, options: &ExtractOptions) -> Option<Metadata> {
    match Fetcher::new(&UserAgentConfig::default()) {
        Ok(fetcher) => fetcher.fetch_and_extract(url, options).await,
        Err(e) => {
            tracing::error!("Failed to build HTTP client: {}", e);
            None
        }
    }
}
