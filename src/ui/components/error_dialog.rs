// SPDX-License-Identifier: MPL-2.0
//! Modal dialog reporting a failed fetch.
//!
//! Shows a title, the request URL, a description of what went wrong and a
//! single dismiss button. [`modal`] layers it over the rest of the window
//! behind a scrim that swallows input until the dialog is dismissed.
//!
//! # Usage
//!
//! ```ignore
//! let dialog = ErrorDialog::new(Message::DismissError)
//!     .title("Unable to get images")
//!     .url_line("URL: https://itunes.apple.com/search?...")
//!     .description("The server answered with HTTP status 500.")
//!     .dismiss_label("OK")
//!     .view();
//! modal(content, dialog)
//! ```

use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, center, opaque, stack, text, Column, Container, Text};
use iced::{alignment, Element, Length};

#[derive(Debug, Clone)]
pub struct ErrorDialog<Message> {
    title: String,
    url_line: String,
    description: String,
    dismiss_label: String,
    on_dismiss: Message,
}

impl<Message: Clone + 'static> ErrorDialog<Message> {
    pub fn new(on_dismiss: Message) -> Self {
        Self {
            title: String::new(),
            url_line: String::new(),
            description: String::new(),
            dismiss_label: "OK".to_string(),
            on_dismiss,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Line naming the request that failed, already formatted.
    pub fn url_line(mut self, url_line: impl Into<String>) -> Self {
        self.url_line = url_line.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn dismiss_label(mut self, label: impl Into<String>) -> Self {
        self.dismiss_label = label.into();
        self
    }

    pub fn view(self) -> Element<'static, Message> {
        let title = Text::new(self.title)
            .size(typography::TITLE_SM)
            .color(palette::ERROR_500);

        // URLs can be long and have no spaces; let them wrap anywhere.
        let url = Text::new(self.url_line)
            .size(typography::CAPTION)
            .wrapping(text::Wrapping::Glyph);

        let description = Text::new(self.description).size(typography::BODY);

        let dismiss = button(Text::new(self.dismiss_label))
            .on_press(self.on_dismiss)
            .padding([spacing::XXS, spacing::MD])
            .style(styles::button::primary);

        let content = Column::new()
            .spacing(spacing::SM)
            .width(Length::Fill)
            .push(title)
            .push(url)
            .push(description)
            .push(
                Container::new(dismiss)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Right),
            );

        Container::new(content)
            .width(Length::Fill)
            .max_width(sizing::DIALOG_MAX_WIDTH)
            .padding(spacing::LG)
            .style(styles::container::panel)
            .into()
    }
}

/// Layers `dialog` centered over `base`; `base` receives no input meanwhile.
pub fn modal<'a, Message: 'a>(
    base: impl Into<Element<'a, Message>>,
    dialog: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    stack![
        base.into(),
        opaque(
            center(opaque(dialog))
                .padding(spacing::LG)
                .style(styles::container::scrim)
        )
    ]
    .into()
}
