// SPDX-License-Identifier: MPL-2.0
//! Application root state and the fetch/slideshow orchestration.
//!
//! The `App` struct owns the search form, the gallery, the HTTP client and
//! the fetch lifecycle, and translates messages into side effects. Handlers
//! live in [`update`], rendering in [`view`], timers in [`subscription`].

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use update::PLACEHOLDER_NOTIFICATION_KEY;
pub use view::{error_description, status_text};

use crate::config::{self, Config};
use crate::gallery::Gallery;
use crate::i18n::fluent::I18n;
use crate::search::{FetchError, ItunesClient, MediaType};
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;
use std::time::Duration;

/// What the line under the toolbar says.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Instructions,
    Fetching,
    /// Gallery populated from this request URL.
    Showing(String),
    Failed,
}

/// Where the current fetch is. The URL is the search request URL.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchPhase {
    #[default]
    Idle,
    Searching {
        url: String,
    },
    Downloading {
        url: String,
    },
}

impl FetchPhase {
    #[must_use]
    pub fn is_busy(&self) -> bool {
        !matches!(self, FetchPhase::Idle)
    }
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    client: ItunesClient,
    theme_mode: ThemeMode,
    slideshow_interval: Duration,
    search_term: String,
    media: MediaType,
    gallery: Gallery,
    rng: StdRng,
    /// Identifies the latest fetch; results tagged with another value are stale.
    generation: u64,
    phase: FetchPhase,
    playing: bool,
    status: Status,
    progress: f32,
    error: Option<FetchError>,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("search_term", &self.search_term)
            .field("media", &self.media)
            .field("generation", &self.generation)
            .field("phase", &self.phase)
            .field("playing", &self.playing)
            .field("populated", &self.gallery.is_populated())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 720.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 640.0;
pub const MIN_WINDOW_WIDTH: f32 = 640.0;
pub const MIN_WINDOW_HEIGHT: f32 = 600.0;

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires the boot closure to be Fn; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::with_config(None, Config::default(), None)
    }
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        (Self::with_config(flags.lang, config, config_warning), Task::none())
    }

    /// Builds the initial state from an already loaded configuration.
    ///
    /// `config_warning` is the i18n key of a problem found while loading it.
    pub fn with_config(lang: Option<String>, config: Config, config_warning: Option<String>) -> Self {
        let mut notifications = notifications::Manager::new();
        if let Some(key) = config_warning {
            notifications.push(Notification::warning(key));
        }

        Self {
            i18n: I18n::new(lang, &config),
            client: ItunesClient::new(&config),
            theme_mode: config.general.theme_mode,
            slideshow_interval: config.slideshow_interval(),
            search_term: config.default_term(),
            media: config.default_media(),
            gallery: Gallery::new(),
            rng: StdRng::from_entropy(),
            generation: 0,
            phase: FetchPhase::Idle,
            playing: false,
            status: Status::Instructions,
            progress: 0.0,
            error: None,
            notifications,
        }
    }

    /// Replaces the HTTP client, e.g. to point at another endpoint.
    #[must_use]
    pub fn with_client(mut self, client: ItunesClient) -> Self {
        self.client = client;
        self
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    #[must_use]
    pub fn play_enabled(&self) -> bool {
        self.gallery.is_populated() && !self.phase.is_busy()
    }

    #[must_use]
    pub fn fetch_enabled(&self) -> bool {
        !self.phase.is_busy()
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Whether the slideshow timer should be running.
    #[must_use]
    pub fn slideshow_active(&self) -> bool {
        self.playing && self.play_enabled()
    }

    #[must_use]
    pub fn status(&self) -> &Status {
        &self.status
    }

    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    #[must_use]
    pub fn error(&self) -> Option<&FetchError> {
        self.error.as_ref()
    }

    #[must_use]
    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    #[must_use]
    pub fn phase(&self) -> &FetchPhase {
        &self.phase
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_slideshow_subscription(
                self.slideshow_active(),
                self.slideshow_interval,
            ),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            client: &self.client,
            search_term: &self.search_term,
            media: self.media,
            gallery: &mut self.gallery,
            rng: &mut self.rng,
            generation: &mut self.generation,
            phase: &mut self.phase,
            playing: &mut self.playing,
            status: &mut self.status,
            progress: &mut self.progress,
            error: &mut self.error,
            notifications: &mut self.notifications,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SearchTermChanged(term) => {
                self.search_term = term;
                Task::none()
            }
            Message::MediaSelected(media) => {
                self.media = media;
                Task::none()
            }
            Message::FetchPressed => update::handle_fetch_pressed(&mut self.update_context()),
            Message::SearchCompleted {
                generation,
                url,
                result,
            } => {
                update::handle_search_completed(&mut self.update_context(), generation, url, result)
            }
            Message::Download { generation, event } => {
                update::handle_download_event(&mut self.update_context(), generation, event)
            }
            Message::TogglePlayback => {
                update::handle_toggle_playback(&mut self.update_context());
                Task::none()
            }
            Message::SlideshowTick(_) => {
                update::handle_slideshow_tick(&mut self.update_context());
                Task::none()
            }
            Message::DismissError => {
                self.error = None;
                Task::none()
            }
            Message::Notification(message) => {
                self.notifications.handle_message(&message);
                Task::none()
            }
            Message::Tick(_) => {
                self.notifications.tick();
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            search_term: &self.search_term,
            media: self.media,
            gallery: &self.gallery,
            playing: self.playing,
            play_enabled: self.play_enabled(),
            fetch_enabled: self.fetch_enabled(),
            status: &self.status,
            progress: self.progress,
            error: self.error.as_ref(),
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SLOT_COUNT;
    use crate::gallery::{Artwork, DownloadEvent, DownloadReport};
    use std::time::Instant;

    const SEARCH_URL: &str = "https://itunes.apple.com/search?term=star+wars&limit=200&media=music";

    fn english_app() -> App {
        let mut app = App::with_config(Some("en-US".to_string()), Config::default(), None);
        app.rng = StdRng::seed_from_u64(5);
        app
    }

    fn artwork_urls(count: usize) -> Vec<String> {
        (0..count)
            .map(|i| format!("https://img.test/{i}.jpg"))
            .collect()
    }

    fn placeholder_report(count: usize, failed: usize) -> DownloadReport {
        DownloadReport {
            artwork: artwork_urls(count)
                .into_iter()
                .map(Artwork::placeholder)
                .collect(),
            failed,
        }
    }

    fn populated_app() -> App {
        let mut app = english_app();
        let _ = app.update(Message::FetchPressed);
        let generation = app.generation();
        let _ = app.update(Message::SearchCompleted {
            generation,
            url: SEARCH_URL.to_string(),
            result: Ok(artwork_urls(25)),
        });
        let _ = app.update(Message::Download {
            generation,
            event: DownloadEvent::Finished(Ok(placeholder_report(25, 0))),
        });
        assert!(app.gallery().is_populated());
        app
    }

    fn slots(app: &App) -> Vec<Option<usize>> {
        (0..SLOT_COUNT).map(|s| app.gallery().slot(s)).collect()
    }

    #[test]
    fn new_app_starts_with_defaults() {
        let app = english_app();
        assert_eq!(app.search_term, "star wars");
        assert_eq!(app.media, MediaType::Music);
        assert_eq!(app.status(), &Status::Instructions);
        assert_eq!(app.title(), "GalleryApp!");
        assert!(!app.play_enabled());
        assert!(app.fetch_enabled());
        assert!(!app.slideshow_active());
        assert!(app.error().is_none());
    }

    #[test]
    fn config_warning_becomes_a_toast() {
        let app = App::with_config(
            None,
            Config::default(),
            Some("notification-config-load-error".to_string()),
        );
        assert_eq!(app.notifications().visible_count(), 1);
    }

    #[test]
    fn form_edits_are_stored() {
        let mut app = english_app();
        let _ = app.update(Message::SearchTermChanged("beatles".into()));
        let _ = app.update(Message::MediaSelected(MediaType::MusicVideo));
        assert_eq!(app.search_term, "beatles");
        assert_eq!(app.media, MediaType::MusicVideo);
    }

    #[test]
    fn fetch_pressed_disables_controls_and_pauses() {
        let mut app = populated_app();
        let _ = app.update(Message::TogglePlayback);
        assert!(app.is_playing());

        let _ = app.update(Message::FetchPressed);
        assert!(!app.is_playing());
        assert!(!app.play_enabled());
        assert!(!app.fetch_enabled());
        assert_eq!(app.status(), &Status::Fetching);
        assert_eq!(
            app.phase(),
            &FetchPhase::Searching {
                url: SEARCH_URL.to_string()
            }
        );
        assert_eq!(app.generation(), 2);
    }

    #[test]
    fn second_fetch_press_is_ignored_while_busy() {
        let mut app = english_app();
        let _ = app.update(Message::FetchPressed);
        let _ = app.update(Message::FetchPressed);
        assert_eq!(app.generation(), 1);
    }

    #[test]
    fn successful_fetch_populates_gallery() {
        let app = populated_app();
        assert_eq!(app.status(), &Status::Showing(SEARCH_URL.to_string()));
        assert!(app.play_enabled());
        assert!(app.fetch_enabled());
        assert!(!app.is_playing());
        assert_eq!(app.progress(), 1.0);
        assert_eq!(app.gallery().candidate_count(), 25);
        for slot in 0..SLOT_COUNT {
            assert_eq!(app.gallery().slot(slot), Some(slot));
        }
        assert_eq!(
            status_text(&app.i18n, app.status()),
            SEARCH_URL.to_string()
        );
    }

    #[test]
    fn download_progress_is_tracked() {
        let mut app = english_app();
        let _ = app.update(Message::FetchPressed);
        let _ = app.update(Message::SearchCompleted {
            generation: 1,
            url: SEARCH_URL.to_string(),
            result: Ok(artwork_urls(25)),
        });
        assert!(matches!(app.phase(), FetchPhase::Downloading { .. }));

        let _ = app.update(Message::Download {
            generation: 1,
            event: DownloadEvent::Progress(0.4),
        });
        assert!((app.progress() - 0.4).abs() < f32::EPSILON);
    }

    #[test]
    fn placeholders_raise_a_single_warning() {
        let mut app = english_app();
        let _ = app.update(Message::FetchPressed);
        let _ = app.update(Message::SearchCompleted {
            generation: 1,
            url: SEARCH_URL.to_string(),
            result: Ok(artwork_urls(22)),
        });
        let _ = app.update(Message::Download {
            generation: 1,
            event: DownloadEvent::Finished(Ok(placeholder_report(22, 3))),
        });
        assert!(app.gallery().is_populated());
        let toasts: Vec<_> = app.notifications().visible().collect();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].message_key(), PLACEHOLDER_NOTIFICATION_KEY);
        assert_eq!(
            toasts[0].message_args(),
            &[("count".to_string(), "3".to_string())]
        );
    }

    #[test]
    fn http_failure_keeps_existing_gallery() {
        let mut app = populated_app();
        let before = slots(&app);

        let _ = app.update(Message::FetchPressed);
        let generation = app.generation();
        let _ = app.update(Message::SearchCompleted {
            generation,
            url: SEARCH_URL.to_string(),
            result: Err(FetchError::Status {
                url: SEARCH_URL.to_string(),
                status: 500,
            }),
        });

        let err = app.error().expect("dialog open");
        assert_eq!(err.url(), SEARCH_URL);
        assert_eq!(app.status(), &Status::Failed);
        assert!(app.fetch_enabled());
        assert!(app.play_enabled());
        assert_eq!(app.progress(), 1.0);
        assert_eq!(slots(&app), before);
    }

    #[test]
    fn insufficient_results_without_gallery_keeps_play_disabled() {
        let mut app = english_app();
        let _ = app.update(Message::FetchPressed);
        let _ = app.update(Message::SearchCompleted {
            generation: 1,
            url: SEARCH_URL.to_string(),
            result: Ok(artwork_urls(10)),
        });

        assert_eq!(
            app.error(),
            Some(&FetchError::InsufficientResults {
                url: SEARCH_URL.to_string(),
                found: 10
            })
        );
        assert_eq!(
            error_description(&app.i18n, app.error().expect("dialog open")),
            "10 distinct results were found, but 21 or more are required."
        );
        assert!(!app.play_enabled());
        assert!(app.fetch_enabled());
        assert!(!app.gallery().is_populated());
    }

    #[test]
    fn stale_results_are_ignored() {
        let mut app = english_app();
        let _ = app.update(Message::FetchPressed);
        let _ = app.update(Message::SearchCompleted {
            generation: 0,
            url: SEARCH_URL.to_string(),
            result: Ok(artwork_urls(30)),
        });
        assert!(matches!(app.phase(), FetchPhase::Searching { .. }));

        let _ = app.update(Message::Download {
            generation: 0,
            event: DownloadEvent::Finished(Ok(placeholder_report(30, 0))),
        });
        assert!(!app.gallery().is_populated());
    }

    #[test]
    fn download_task_failure_opens_dialog() {
        let mut app = english_app();
        let _ = app.update(Message::FetchPressed);
        let _ = app.update(Message::SearchCompleted {
            generation: 1,
            url: SEARCH_URL.to_string(),
            result: Ok(artwork_urls(21)),
        });
        let _ = app.update(Message::Download {
            generation: 1,
            event: DownloadEvent::Finished(Err("download task cancelled".into())),
        });
        assert!(matches!(app.error(), Some(FetchError::Transport { .. })));
        assert_eq!(app.status(), &Status::Failed);
    }

    #[test]
    fn dismiss_closes_dialog() {
        let mut app = english_app();
        let _ = app.update(Message::FetchPressed);
        let _ = app.update(Message::SearchCompleted {
            generation: 1,
            url: SEARCH_URL.to_string(),
            result: Ok(Vec::new()),
        });
        assert!(app.error().is_some());
        let _ = app.update(Message::DismissError);
        assert!(app.error().is_none());
    }

    #[test]
    fn toggle_flips_between_play_and_pause() {
        let mut app = populated_app();
        let _ = app.update(Message::TogglePlayback);
        assert!(app.is_playing());
        assert!(app.slideshow_active());
        let _ = app.update(Message::TogglePlayback);
        assert!(!app.is_playing());
        assert!(!app.slideshow_active());
    }

    #[test]
    fn toggle_is_ignored_without_gallery() {
        let mut app = english_app();
        let _ = app.update(Message::TogglePlayback);
        assert!(!app.is_playing());
    }

    #[test]
    fn slideshow_tick_swaps_one_slot_only_while_playing() {
        let mut app = populated_app();
        let before = slots(&app);
        let _ = app.update(Message::SlideshowTick(Instant::now()));
        assert_eq!(slots(&app), before, "paused gallery must not change");

        let _ = app.update(Message::TogglePlayback);
        let _ = app.update(Message::SlideshowTick(Instant::now()));
        let after = slots(&app);
        let changed = before
            .iter()
            .zip(&after)
            .filter(|(a, b)| a != b)
            .count();
        assert_eq!(changed, 1);
    }

    #[test]
    fn invalid_endpoint_fails_immediately() {
        let mut config = Config::default();
        config.search.endpoint = Some("not a url".to_string());
        let mut app = App::with_config(Some("en-US".to_string()), config, None);
        let _ = app.update(Message::FetchPressed);
        assert!(app.fetch_enabled());
        assert_eq!(app.status(), &Status::Failed);
        assert_eq!(app.error().map(FetchError::url), Some("not a url"));
    }
}
