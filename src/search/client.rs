// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the search endpoint and the artwork thumbnails.

use super::{parse_artwork_urls, FetchError, SearchQuery};
use crate::config::Config;
use std::time::Duration;

/// Cheap to clone: the underlying `reqwest::Client` is reference counted.
#[derive(Debug, Clone)]
pub struct ItunesClient {
    http: reqwest::Client,
    endpoint: String,
    image_timeout: Duration,
}

impl ItunesClient {
    /// Builds a client with the redirect policy, user agent and timeouts
    /// taken from `config`.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(config.user_agent())
            .timeout(config.request_timeout())
            .build()
            .unwrap_or_else(|err| {
                tracing::warn!(error = %err, "falling back to default HTTP client");
                reqwest::Client::default()
            });
        Self::with_http(http, config.endpoint(), config.image_timeout())
    }

    /// Wraps an existing `reqwest::Client`.
    #[must_use]
    pub fn with_http(
        http: reqwest::Client,
        endpoint: impl Into<String>,
        image_timeout: Duration,
    ) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
            image_timeout,
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Full request URL for `query`, as shown in the status line.
    pub fn request_url(&self, query: &SearchQuery) -> Result<String, FetchError> {
        query.url(&self.endpoint).map(String::from)
    }

    /// Runs the search and returns the unique artwork URLs in response order.
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<String>, FetchError> {
        let url = query.url(&self.endpoint)?;
        let url_str = url.to_string();
        tracing::debug!(url = %url_str, "searching");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|err| FetchError::transport(&url_str, &err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url_str,
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| FetchError::transport(&url_str, &err))?;
        let urls = parse_artwork_urls(&body, &url_str)?;
        tracing::debug!(url = %url_str, found = urls.len(), "search completed");
        Ok(urls)
    }

    /// Downloads one thumbnail's raw bytes.
    pub async fn fetch_image(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self
            .http
            .get(url)
            .timeout(self.image_timeout)
            .send()
            .await
            .map_err(|err| FetchError::transport(url, &err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|err| FetchError::transport(url, &err))?;
        Ok(bytes.to_vec())
    }
}
