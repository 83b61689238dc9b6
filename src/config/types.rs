use serde::{Deserialize, Deserializer};
use std::time::Duration;

/// Main configuration structure for Head-Meta
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub extract: ExtractOptions,
    #[serde(rename = "user-agent", default)]
    pub user_agent: UserAgentConfig,
}

/// Options controlling a single extraction
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ExtractOptions {
    /// Base URL used to resolve relative icon URLs
    #[serde(rename = "base-url", default)]
    pub base_url: Option<String>,

    /// Time limit for the fetch (milliseconds in config files)
    ///
    /// Only the fetcher looks at this.
    #[serde(default, deserialize_with = "deserialize_millis")]
    pub timeout: Option<Duration>,

    /// Keys to keep; when set the result holds only these keys
    #[serde(rename = "meta-tags", default)]
    pub meta_tags: Option<Vec<String>>,
}

impl ExtractOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_meta_tags<I, S>(mut self, meta_tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.meta_tags = Some(meta_tags.into_iter().map(Into::into).collect());
        self
    }
}

fn deserialize_millis<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u64>::deserialize(deserializer)?.map(Duration::from_millis))
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the client
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the client
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the client (may be empty)
    #[serde(rename = "contact-url")]
    pub contact_url: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: env!("CARGO_PKG_NAME").to_string(),
            crawler_version: env!("CARGO_PKG_VERSION").to_string(),
            contact_url: String::new(),
        }
    }
}
