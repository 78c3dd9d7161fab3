// SPDX-License-Identifier: MPL-2.0
//! User interface building blocks.
//!
//! - [`components`] - error dialog and thumbnail grid
//! - [`styles`] - button and container styles
//! - [`design_tokens`] - colors, spacing, sizing
//! - [`theming`] - light/dark/system theme mode
//! - [`notifications`] - toast notifications

pub mod components;
pub mod design_tokens;
pub mod notifications;
pub mod styles;
pub mod theming;
