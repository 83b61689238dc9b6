//! Head-Meta main entry point
//!
//! This is the command-line interface for the Head-Meta metadata extractor.

use anyhow::Context;
use clap::Parser;
use head_meta::config::{load_config, Config};
use head_meta::{extract, ExtractOptions, Fetcher, Metadata};
use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use url::Url;

/// Head-Meta: page metadata extraction
///
/// Extracts the title, language, icons and every name/property meta tag
/// from a web page or an HTML file and prints them as JSON.
#[derive(Parser, Debug)]
#[command(name = "head-meta")]
#[command(version)]
#[command(about = "Extract page metadata as JSON", long_about = None)]
struct Cli {
    /// URL to fetch, path to an HTML file, or "-" for stdin
    #[arg(value_name = "TARGET")]
    target: String,

    /// Base URL for resolving relative icon links
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Fetch timeout in milliseconds
    #[arg(long, value_name = "MS")]
    timeout: Option<u64>,

    /// Keep only this key (repeatable)
    #[arg(long = "meta-tag", value_name = "KEY")]
    meta_tags: Vec<String>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print JSON on a single line
    #[arg(long)]
    compact: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    /// Layers command-line flags over the configured options
    fn apply_overrides(&self, mut options: ExtractOptions) -> ExtractOptions {
        if let Some(base_url) = &self.base_url {
            options.base_url = Some(base_url.clone());
        }
        if let Some(timeout) = self.timeout {
            options.timeout = Some(Duration::from_millis(timeout));
        }
        if !self.meta_tags.is_empty() {
            options.meta_tags = Some(self.meta_tags.clone());
        }
        options
    }

    fn is_url(&self) -> bool {
        is_http_url(&self.target)
    }
}

/// Returns true if `target` parses as an absolute HTTP(S) URL
fn is_http_url(target: &str) -> bool {
    Url::parse(target).is_ok_and(|url| matches!(url.scheme(), "http" | "https"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?
        }
        None => Config::default(),
    };

    let options = cli.apply_overrides(config.extract.clone());

    let metadata = if cli.is_url() {
        let fetcher = Fetcher::new(&config.user_agent).context("Failed to build HTTP client")?;
        fetcher.fetch_and_extract(&cli.target, &options).await
    } else {
        let html = read_html(&cli.target)?;
        Some(extract(&html, &options))
    };

    print_metadata(metadata.as_ref(), cli.compact)?;

    if metadata.is_none() {
        tracing::error!("No metadata could be fetched from {}", cli.target);
        std::process::exit(1);
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr so stdout stays valid JSON.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("head_meta=info,warn"),
            1 => EnvFilter::new("head_meta=debug,info"),
            2 => EnvFilter::new("head_meta=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Reads HTML from a file, or from stdin when `target` is "-"
fn read_html(target: &str) -> anyhow::Result<String> {
    if target == "-" {
        let mut html = String::new();
        std::io::stdin()
            .read_to_string(&mut html)
            .context("Failed to read HTML from stdin")?;
        Ok(html)
    } else {
        std::fs::read_to_string(target).with_context(|| format!("Failed to read {}", target))
    }
}

fn print_metadata(metadata: Option<&Metadata>, compact: bool) -> anyhow::Result<()> {
    let json = if compact {
        serde_json::to_string(&metadata)?
    } else {
        serde_json::to_string_pretty(&metadata)?
    };
    println!("{}", json);
    Ok(())
}
