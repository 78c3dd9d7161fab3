// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the fetch lifecycle and the slideshow.

use super::{FetchPhase, Message, Status};
use crate::gallery::{check_candidate_count, download_events, DownloadEvent, Gallery};
use crate::search::{FetchError, ItunesClient, MediaType, SearchQuery};
use crate::ui::notifications::{self, Notification};
use iced::Task;
use rand::rngs::StdRng;

/// i18n key of the toast reporting thumbnails replaced by placeholders.
pub const PLACEHOLDER_NOTIFICATION_KEY: &str = "notification-placeholders";

/// Mutable view of the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub client: &'a ItunesClient,
    pub search_term: &'a str,
    pub media: MediaType,
    pub gallery: &'a mut Gallery,
    pub rng: &'a mut StdRng,
    pub generation: &'a mut u64,
    pub phase: &'a mut FetchPhase,
    pub playing: &'a mut bool,
    pub status: &'a mut Status,
    pub progress: &'a mut f32,
    pub error: &'a mut Option<FetchError>,
    pub notifications: &'a mut notifications::Manager,
}

/// Starts a new fetch: pauses the slideshow, bumps the generation and
/// issues the search request.
pub fn handle_fetch_pressed(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx.phase.is_busy() {
        return Task::none();
    }

    *ctx.playing = false;
    *ctx.generation += 1;
    let generation = *ctx.generation;
    *ctx.status = Status::Fetching;
    *ctx.progress = 0.0;
    ctx.notifications.clear_key(PLACEHOLDER_NOTIFICATION_KEY);

    let query = SearchQuery::new(ctx.search_term, ctx.media);
    let url = match ctx.client.request_url(&query) {
        Ok(url) => url,
        Err(err) => {
            fail_fetch(ctx, err);
            return Task::none();
        }
    };

    tracing::info!(generation, url = %url, "fetching images");
    *ctx.phase = FetchPhase::Searching { url: url.clone() };

    let client = ctx.client.clone();
    Task::perform(
        async move {
            let result = client.search(&query).await;
            (url, result)
        },
        move |(url, result)| Message::SearchCompleted {
            generation,
            url,
            result,
        },
    )
}

/// Validates the artwork URLs and starts downloading the thumbnails.
pub fn handle_search_completed(
    ctx: &mut UpdateContext<'_>,
    generation: u64,
    url: String,
    result: Result<Vec<String>, FetchError>,
) -> Task<Message> {
    if generation != *ctx.generation {
        tracing::debug!(generation, current = *ctx.generation, "dropping stale search result");
        return Task::none();
    }

    let urls = match result.and_then(|urls| {
        check_candidate_count(&urls)
            .map(|()| urls)
            .map_err(|err| FetchError::from_gallery(err, url.as_str()))
    }) {
        Ok(urls) => urls,
        Err(err) => {
            fail_fetch(ctx, err);
            return Task::none();
        }
    };

    tracing::info!(generation, found = urls.len(), "downloading thumbnails");
    *ctx.phase = FetchPhase::Downloading { url };
    *ctx.progress = 0.0;

    Task::stream(download_events(ctx.client.clone(), urls))
        .map(move |event| Message::Download { generation, event })
}

pub fn handle_download_event(
    ctx: &mut UpdateContext<'_>,
    generation: u64,
    event: DownloadEvent,
) -> Task<Message> {
    if generation != *ctx.generation {
        return Task::none();
    }
    let FetchPhase::Downloading { url } = ctx.phase.clone() else {
        return Task::none();
    };

    match event {
        DownloadEvent::Progress(value) => {
            *ctx.progress = value.clamp(0.0, 1.0);
        }
        DownloadEvent::Finished(Ok(report)) => match ctx.gallery.populate(report.artwork) {
            Ok(()) => {
                tracing::info!(
                    generation,
                    candidates = ctx.gallery.candidate_count(),
                    placeholders = report.failed,
                    "gallery populated"
                );
                *ctx.phase = FetchPhase::Idle;
                *ctx.progress = 1.0;
                if report.failed > 0 {
                    ctx.notifications.push(
                        Notification::warning(PLACEHOLDER_NOTIFICATION_KEY)
                            .with_arg("count", report.failed.to_string()),
                    );
                }
                *ctx.status = Status::Showing(url);
            }
            Err(err) => fail_fetch(ctx, FetchError::from_gallery(err, url)),
        },
        DownloadEvent::Finished(Err(reason)) => {
            fail_fetch(ctx, FetchError::Transport { url, reason });
        }
    }
    Task::none()
}

/// Surfaces `err` in the error dialog. An existing gallery stays on screen
/// and can be played again.
fn fail_fetch(ctx: &mut UpdateContext<'_>, err: FetchError) {
    tracing::warn!(url = %err.url(), error = %err, "fetch failed");
    *ctx.phase = FetchPhase::Idle;
    *ctx.status = Status::Failed;
    if ctx.gallery.is_populated() {
        *ctx.progress = 1.0;
    }
    *ctx.error = Some(err);
}

pub fn handle_toggle_playback(ctx: &mut UpdateContext<'_>) {
    if ctx.gallery.is_populated() && !ctx.phase.is_busy() {
        *ctx.playing = !*ctx.playing;
        tracing::debug!(playing = *ctx.playing, "slideshow toggled");
    }
}

pub fn handle_slideshow_tick(ctx: &mut UpdateContext<'_>) {
    if *ctx.playing && !ctx.phase.is_busy() {
        ctx.gallery.swap_one(&mut *ctx.rng);
    }
}
