// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components.
//!
//! - [`error_dialog`] - modal dialog for fetch failures
//! - [`gallery_grid`] - the 4 x 5 thumbnail grid

pub mod error_dialog;
pub mod gallery_grid;
