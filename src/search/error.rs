// SPDX-License-Identifier: MPL-2.0
//! Errors raised while fetching search results.

use crate::config::MIN_CANDIDATES;
use crate::gallery::GalleryError;

/// Everything that can abort a fetch. Each variant carries the URL that was
/// being requested so the error dialog can show it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// Connection, TLS, timeout or body read failure.
    #[error("{reason}")]
    Transport { url: String, reason: String },

    /// Non-2xx HTTP status.
    #[error("HTTP status {status}")]
    Status { url: String, status: u16 },

    /// Response body was not the expected JSON.
    #[error("invalid response: {reason}")]
    Parse { url: String, reason: String },

    /// Too few distinct artwork URLs to fill the grid.
    #[error(
        "{found} distinct results were found, but {} or more are required.",
        MIN_CANDIDATES
    )]
    InsufficientResults { url: String, found: usize },
}

impl FetchError {
    /// URL of the request that failed.
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            FetchError::Transport { url, .. }
            | FetchError::Status { url, .. }
            | FetchError::Parse { url, .. }
            | FetchError::InsufficientResults { url, .. } => url,
        }
    }

    /// Fluent message key describing the error.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            FetchError::Transport { .. } => "error-transport",
            FetchError::Status { .. } => "error-status",
            FetchError::Parse { .. } => "error-parse",
            FetchError::InsufficientResults { .. } => "error-insufficient",
        }
    }

    /// Arguments for [`Self::i18n_key`].
    #[must_use]
    pub fn i18n_args(&self) -> Vec<(&'static str, String)> {
        match self {
            FetchError::Transport { reason, .. } | FetchError::Parse { reason, .. } => {
                vec![("reason", reason.clone())]
            }
            FetchError::Status { status, .. } => vec![("status", status.to_string())],
            FetchError::InsufficientResults { found, .. } => vec![("found", found.to_string())],
        }
    }

    /// Attaches the search URL to a gallery validation error.
    #[must_use]
    pub fn from_gallery(err: GalleryError, url: impl Into<String>) -> Self {
        match err {
            GalleryError::InsufficientResults { found, .. } => FetchError::InsufficientResults {
                url: url.into(),
                found,
            },
        }
    }

    pub(crate) fn transport(url: impl Into<String>, err: &reqwest::Error) -> Self {
        let reason = if err.is_timeout() {
            "request timed out".to_string()
        } else {
            err.to_string()
        };
        FetchError::Transport {
            url: url.into(),
            reason,
        }
    }
}
