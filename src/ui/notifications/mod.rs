// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! Used for feedback that must not interrupt the gallery: an unreadable
//! settings file, or thumbnails replaced by placeholders. Fetch failures use
//! the modal error dialog instead.
//!
//! # Components
//!
//! - [`Notification`] - message key, arguments and severity
//! - [`Manager`] - queue with at most three visible toasts
//! - [`Toast`] - rendering of the bottom-right overlay
//!
//! Durations: 3s for success/info, 5s for warnings, manual dismiss for errors.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
