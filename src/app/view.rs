// SPDX-License-Identifier: MPL-2.0
//! View rendering for the gallery window.
//!
//! Layout, top to bottom: toolbar, status line, thumbnail grid, progress
//! bar with the credit line. Toasts float bottom-right and the error dialog,
//! when open, covers everything.

use super::{Message, Status};
use crate::gallery::Gallery;
use crate::i18n::fluent::I18n;
use crate::search::{FetchError, MediaType};
use crate::ui::components::{error_dialog, gallery_grid};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::notifications::{self, Toast};
use crate::ui::styles;
use iced::widget::{
    button, pick_list, progress_bar, stack, text, text_input, Column, Container, Row, Space,
};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub search_term: &'a str,
    pub media: MediaType,
    pub gallery: &'a Gallery,
    pub playing: bool,
    pub play_enabled: bool,
    pub fetch_enabled: bool,
    pub status: &'a Status,
    pub progress: f32,
    pub error: Option<&'a FetchError>,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content = Column::new()
        .spacing(spacing::SM)
        .padding(spacing::MD)
        .push(toolbar(&ctx))
        .push(
            text(status_text(ctx.i18n, ctx.status))
                .size(typography::CAPTION)
                .wrapping(text::Wrapping::Glyph),
        )
        .push(gallery_grid::view(ctx.gallery))
        .push(footer(&ctx));

    let base = stack![
        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill),
        Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification),
    ];

    match ctx.error {
        Some(err) => error_dialog::modal(base, error_view(ctx.i18n, err)),
        None => base.into(),
    }
}

fn toolbar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let play_label = if ctx.playing {
        ctx.i18n.tr("pause-button")
    } else {
        ctx.i18n.tr("play-button")
    };
    let play = button(text(play_label))
        .on_press_maybe(ctx.play_enabled.then_some(Message::TogglePlayback))
        .style(styles::button_secondary);

    let search = text_input(&ctx.i18n.tr("search-placeholder"), ctx.search_term)
        .on_input(Message::SearchTermChanged)
        .on_submit_maybe(ctx.fetch_enabled.then_some(Message::FetchPressed))
        .size(typography::BODY)
        .width(Length::Fixed(sizing::INPUT_WIDTH));

    let media = pick_list(MediaType::ALL, Some(ctx.media), Message::MediaSelected)
        .text_size(typography::BODY)
        .width(Length::Fixed(sizing::MEDIA_PICKER_WIDTH));

    let fetch = button(text(ctx.i18n.tr("fetch-button")))
        .on_press_maybe(ctx.fetch_enabled.then_some(Message::FetchPressed))
        .style(styles::button_primary);

    Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(play)
        .push(Space::new().width(Length::Fixed(spacing::XS)))
        .push(text(ctx.i18n.tr("search-label")).size(typography::BODY))
        .push(search)
        .push(media)
        .push(fetch)
        .into()
}

fn footer<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let progress = Container::new(progress_bar(0.0..=1.0, ctx.progress))
        .width(Length::Fixed(sizing::PROGRESS_WIDTH));

    Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(progress)
        .push(text(ctx.i18n.tr("credit")).size(typography::CAPTION))
        .into()
}

fn error_view(i18n: &I18n, err: &FetchError) -> Element<'static, Message> {
    error_dialog::ErrorDialog::new(Message::DismissError)
        .title(i18n.tr("error-dialog-title"))
        .url_line(i18n.tr_with_args("error-dialog-url", &[("url", err.url())]))
        .description(error_description(i18n, err))
        .dismiss_label(i18n.tr("error-dialog-dismiss"))
        .view()
}

/// Localized description of a fetch error.
pub fn error_description(i18n: &I18n, err: &FetchError) -> String {
    let args = err.i18n_args();
    let args: Vec<(&str, &str)> = args.iter().map(|(k, v)| (*k, v.as_str())).collect();
    i18n.tr_with_args(err.i18n_key(), &args)
}

/// Text of the line under the toolbar.
pub fn status_text(i18n: &I18n, status: &Status) -> String {
    match status {
        Status::Instructions => i18n.tr("status-instructions"),
        Status::Fetching => i18n.tr("status-fetching"),
        Status::Showing(url) => i18n.tr_with_args("status-showing", &[("url", url.as_str())]),
        Status::Failed => i18n.tr("status-failed"),
    }
}
