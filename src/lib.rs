// SPDX-License-Identifier: MPL-2.0
//! `itunes_gallery` shows iTunes Search API artwork in a 4 x 5 grid and
//! slowly cycles through the rest of the results.
//!
//! - [`search`] builds the request and talks to the API
//! - [`gallery`] holds the grid model, thumbnail decoding and batch download
//! - [`app`] is the iced application wiring them to the window
//! - [`config`], [`i18n`] and [`ui`] provide settings, translations and styling

pub mod app;
pub mod config;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod search;
pub mod ui;
