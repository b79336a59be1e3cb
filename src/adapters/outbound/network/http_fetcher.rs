use crate::graph_projection::domain::SourceLocation;
use crate::ports::outbound::SourceReader;
use crate::shared::error::GraphError;
use crate::shared::security::MAX_FILE_SIZE;
use crate::shared::Result;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::blocking::Client;
use std::io::Read;
use std::time::Duration;

/// HttpFetcher adapter for downloading device trees and stylesheets
///
/// # Security
/// - Implements timeout (30 seconds)
/// - Rejects bodies larger than `MAX_FILE_SIZE`, before or while streaming
/// - Does not retry failed requests
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    const TIMEOUT_SECONDS: u64 = 30;
    const SPINNER_TICK_MS: u64 = 100;

    /// Creates a new HTTP fetcher with default configuration
    pub fn new() -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("dtgraph/{}", version);
        let client = Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }

    /// Downloads `url`, showing a spinner on stderr while waiting
    pub fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let spinner = Self::spinner(url);
        let result = self.fetch_body(url, MAX_FILE_SIZE);
        spinner.finish_and_clear();
        result
    }

    fn fetch_body(&self, url: &str, limit: u64) -> Result<Vec<u8>> {
        let fetch_error = |details: String| GraphError::FetchError {
            url: url.to_string(),
            details,
        };
        let too_large = |size: u64| {
            fetch_error(format!(
                "Response is too large ({} bytes). Maximum allowed size is {} bytes.",
                size, limit
            ))
        };

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| fetch_error(e.to_string()))?;

        if !response.status().is_success() {
            return Err(fetch_error(format!("Server returned status code {}", response.status())).into());
        }

        if let Some(length) = response.content_length() {
            if length > limit {
                return Err(too_large(length).into());
            }
        }

        // One byte past the limit is enough to tell an oversized body apart
        let mut body = Vec::new();
        response
            .take(limit + 1)
            .read_to_end(&mut body)
            .map_err(|e| fetch_error(e.to_string()))?;
        if body.len() as u64 > limit {
            return Err(too_large(body.len() as u64).into());
        }

        Ok(body)
    }

    fn spinner(url: &str) -> ProgressBar {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("   {spinner:.green} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(format!("Downloading {}", url));
        spinner.enable_steady_tick(Duration::from_millis(Self::SPINNER_TICK_MS));
        spinner
    }
}

impl SourceReader for HttpFetcher {
    fn read_source(&self, location: &SourceLocation) -> Result<Vec<u8>> {
        match location {
            SourceLocation::Remote(url) => self.fetch(url),
            SourceLocation::File(path) => anyhow::bail!(
                "HttpFetcher cannot read local path {}",
                path.display()
            ),
        }
    }
}
