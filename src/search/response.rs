// SPDX-License-Identifier: MPL-2.0
//! Search response decoding.
//!
//! Only `results[].artworkUrl100` is read. Entries without it are skipped
//! and every other field is ignored.

use super::FetchError;
use serde::Deserialize;
use std::collections::HashSet;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub result_count: Option<u64>,
    #[serde(default)]
    pub results: Vec<SearchResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResult {
    #[serde(rename = "artworkUrl100", default)]
    pub artwork_url_100: Option<String>,
}

impl SearchResponse {
    /// Artwork URLs in response order, deduplicated, first occurrence kept.
    #[must_use]
    pub fn artwork_urls(&self) -> Vec<String> {
        unique_artwork_urls(
            self.results
                .iter()
                .filter_map(|result| result.artwork_url_100.as_deref()),
        )
    }
}

/// Order-preserving deduplication of non-empty URLs.
pub fn unique_artwork_urls<'a, I>(urls: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    urls.into_iter()
        .filter(|url| !url.is_empty())
        .filter(|url| seen.insert(*url))
        .map(str::to_string)
        .collect()
}

/// Decodes a response body into its unique artwork URLs.
///
/// `url` is only used to label the error.
pub fn parse_artwork_urls(body: &[u8], url: &str) -> Result<Vec<String>, FetchError> {
    let response: SearchResponse =
        serde_json::from_slice(body).map_err(|err| FetchError::Parse {
            url: url.to_string(),
            reason: err.to_string(),
        })?;
    Ok(response.artwork_urls())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_are_dropped_in_first_seen_order() {
        let urls = unique_artwork_urls(["a", "b", "a", "c", "b"]);
        assert_eq!(urls, vec!["a", "b", "c"]);
    }

    #[test]
    fn empty_urls_are_ignored() {
        let urls = unique_artwork_urls(["", "a", ""]);
        assert_eq!(urls, vec!["a"]);
    }

    #[test]
    fn parses_artwork_urls_and_skips_missing() {
        let body = br#"{
            "resultCount": 4,
            "results": [
                {"artworkUrl100": "https://img.test/1.jpg", "trackName": "One"},
                {"trackName": "No artwork"},
                {"artworkUrl100": "https://img.test/2.jpg"},
                {"artworkUrl100": "https://img.test/1.jpg"}
            ]
        }"#;
        let urls = parse_artwork_urls(body, "https://search.test").expect("valid json");
        assert_eq!(urls, vec!["https://img.test/1.jpg", "https://img.test/2.jpg"]);
    }

    #[test]
    fn missing_results_field_is_empty() {
        let urls = parse_artwork_urls(br#"{"resultCount": 0}"#, "u").expect("valid json");
        assert!(urls.is_empty());
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let err = parse_artwork_urls(b"<html>oops</html>", "https://search.test")
            .expect_err("not json");
        assert!(matches!(err, FetchError::Parse { .. }));
        assert_eq!(err.url(), "https://search.test");
    }

    #[test]
    fn wrong_shape_is_a_parse_error() {
        let err = parse_artwork_urls(br#"{"results": 3}"#, "u").expect_err("bad shape");
        assert!(matches!(err, FetchError::Parse { .. }));
    }
}
