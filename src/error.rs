// SPDX-License-Identifier: MPL-2.0
//! Error types shared across the application.
//!
//! [`Error`] covers local failures (configuration I/O and TOML decoding).
//! Network and validation failures of a fetch live in
//! [`crate::search::FetchError`] and [`crate::gallery::GalleryError`] so the
//! controller can branch on the cause.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
