// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::gallery::DownloadEvent;
use crate::search::{FetchError, MediaType};
use crate::ui::notifications;
use std::time::Instant;

/// Messages consumed by `App::update`.
///
/// Results of asynchronous work carry the generation of the fetch that
/// started them; anything from an older generation is dropped.
#[derive(Debug, Clone)]
pub enum Message {
    SearchTermChanged(String),
    MediaSelected(MediaType),
    FetchPressed,
    SearchCompleted {
        generation: u64,
        url: String,
        result: Result<Vec<String>, FetchError>,
    },
    Download {
        generation: u64,
        event: DownloadEvent,
    },
    TogglePlayback,
    SlideshowTick(Instant),
    DismissError,
    Notification(notifications::NotificationMessage),
    /// Periodic tick for toast auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ITUNES_GALLERY_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
