// SPDX-License-Identifier: MPL-2.0
//! iTunes Search API access.
//!
//! - [`MediaType`] and [`SearchQuery`] describe one search request
//! - [`response`] decodes the JSON body and extracts unique artwork URLs
//! - [`client`] performs the HTTP calls through an injected `reqwest::Client`
//! - [`FetchError`] classifies everything that can go wrong during a fetch

pub mod client;
mod error;
pub mod response;

pub use client::ItunesClient;
pub use error::FetchError;
pub use response::{parse_artwork_urls, unique_artwork_urls, SearchResponse, SearchResult};

use crate::config::SEARCH_RESULT_LIMIT;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Media types accepted by the `media` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MediaType {
    Movie,
    Podcast,
    #[default]
    Music,
    MusicVideo,
    Audiobook,
    ShortFilm,
    TvShow,
    Software,
    Ebook,
    All,
}

impl MediaType {
    /// Every media type, in the order the selector lists them.
    pub const ALL: [MediaType; 10] = [
        MediaType::Movie,
        MediaType::Podcast,
        MediaType::Music,
        MediaType::MusicVideo,
        MediaType::Audiobook,
        MediaType::ShortFilm,
        MediaType::TvShow,
        MediaType::Software,
        MediaType::Ebook,
        MediaType::All,
    ];

    /// Wire name sent to the API.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            MediaType::Movie => "movie",
            MediaType::Podcast => "podcast",
            MediaType::Music => "music",
            MediaType::MusicVideo => "musicVideo",
            MediaType::Audiobook => "audiobook",
            MediaType::ShortFilm => "shortFilm",
            MediaType::TvShow => "tvShow",
            MediaType::Software => "software",
            MediaType::Ebook => "ebook",
            MediaType::All => "all",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the ten wire names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown media type: {0}")]
pub struct UnknownMediaType(pub String);

impl FromStr for MediaType {
    type Err = UnknownMediaType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MediaType::ALL
            .into_iter()
            .find(|media| media.as_str() == s)
            .ok_or_else(|| UnknownMediaType(s.to_string()))
    }
}

/// One search request. Built fresh for every fetch and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    term: String,
    media: MediaType,
    limit: u32,
}

impl SearchQuery {
    #[must_use]
    pub fn new(term: impl Into<String>, media: MediaType) -> Self {
        Self {
            term: term.into(),
            media,
            limit: SEARCH_RESULT_LIMIT,
        }
    }

    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    #[must_use]
    pub fn media(&self) -> MediaType {
        self.media
    }

    #[must_use]
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Builds the request URL against `endpoint`.
    ///
    /// Parameters are form-urlencoded in the order `term`, `limit`, `media`.
    pub fn url(&self, endpoint: &str) -> Result<reqwest::Url, FetchError> {
        let limit = self.limit.to_string();
        reqwest::Url::parse_with_params(
            endpoint,
            &[
                ("term", self.term.as_str()),
                ("limit", limit.as_str()),
                ("media", self.media.as_str()),
            ],
        )
        .map_err(|err| FetchError::Transport {
            url: endpoint.to_string(),
            reason: err.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_ENDPOINT;

    #[test]
    fn media_type_wire_names_round_trip() {
        for media in MediaType::ALL {
            assert_eq!(media.as_str().parse::<MediaType>(), Ok(media));
            assert_eq!(media.to_string(), media.as_str());
        }
    }

    #[test]
    fn media_type_list_is_complete_and_unique() {
        let names: std::collections::HashSet<_> =
            MediaType::ALL.iter().map(|m| m.as_str()).collect();
        assert_eq!(names.len(), 10);
        for expected in [
            "movie",
            "podcast",
            "music",
            "musicVideo",
            "audiobook",
            "shortFilm",
            "tvShow",
            "software",
            "ebook",
            "all",
        ] {
            assert!(names.contains(expected), "missing {expected}");
        }
    }

    #[test]
    fn media_type_defaults_to_music() {
        assert_eq!(MediaType::default(), MediaType::Music);
    }

    #[test]
    fn unknown_media_type_is_rejected() {
        assert_eq!(
            "Music".parse::<MediaType>(),
            Err(UnknownMediaType("Music".to_string()))
        );
    }

    #[test]
    fn serde_names_match_wire_names() {
        for media in MediaType::ALL {
            let json = serde_json::to_string(&media).expect("serialize");
            assert_eq!(json, format!("\"{}\"", media.as_str()));
        }
    }

    #[test]
    fn query_limit_is_fixed() {
        let query = SearchQuery::new("cats", MediaType::Music);
        assert_eq!(query.limit(), 200);
        assert_eq!(query.term(), "cats");
        assert_eq!(query.media(), MediaType::Music);
    }

    #[test]
    fn query_url_encodes_parameters() {
        let query = SearchQuery::new("star wars", MediaType::Music);
        let url = query.url(DEFAULT_ENDPOINT).expect("valid endpoint");
        assert_eq!(
            url.as_str(),
            "https://itunes.apple.com/search?term=star+wars&limit=200&media=music"
        );
    }

    #[test]
    fn query_url_escapes_reserved_characters() {
        let query = SearchQuery::new("rock & roll/50%", MediaType::MusicVideo);
        let url = query.url(DEFAULT_ENDPOINT).expect("valid endpoint");
        assert_eq!(
            url.query(),
            Some("term=rock+%26+roll%2F50%25&limit=200&media=musicVideo")
        );
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(pairs[0], ("term".into(), "rock & roll/50%".into()));
    }

    #[test]
    fn query_url_rejects_invalid_endpoint() {
        let query = SearchQuery::new("cats", MediaType::Music);
        let err = query.url("not a url").expect_err("invalid endpoint");
        assert_eq!(err.url(), "not a url");
    }
}
