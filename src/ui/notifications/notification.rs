// SPDX-License-Identifier: MPL-2.0
//! Notification data: what a toast says and how long it stays.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::palette;
use iced::Color;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Severity level determines display duration and accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    Success,
    #[default]
    Info,
    /// Something went partly wrong but the app carried on.
    Warning,
    /// Stays until dismissed.
    Error,
}

impl Severity {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Glyph drawn at the start of the toast.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Severity::Success => "\u{2713}",
            Severity::Info => "i",
            Severity::Warning | Severity::Error => "!",
        }
    }

    /// `None` means manual dismiss.
    #[must_use]
    pub fn auto_dismiss_duration(self) -> Option<Duration> {
        match self {
            Severity::Success | Severity::Info => Some(Duration::from_secs(3)),
            Severity::Warning => Some(Duration::from_secs(5)),
            Severity::Error => None,
        }
    }
}

/// A toast message, stored as an i18n key so it follows the active locale.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message_key: String,
    message_args: Vec<(String, String)>,
    created_at: Instant,
    dismiss_after: Option<Duration>,
}

impl Notification {
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::next(),
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
            created_at: Instant::now(),
            dismiss_after: severity.auto_dismiss_duration(),
        }
    }

    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_key)
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    /// Overrides the severity's auto-dismiss delay.
    #[must_use]
    pub fn auto_dismiss(mut self, duration: Duration) -> Self {
        self.dismiss_after = Some(duration);
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }

    /// Resolves the message in the current locale.
    #[must_use]
    pub fn text(&self, i18n: &I18n) -> String {
        if self.message_args.is_empty() {
            return i18n.tr(&self.message_key);
        }
        let args: Vec<(&str, &str)> = self
            .message_args
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        i18n.tr_with_args(&self.message_key, &args)
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.dismiss_after
            .is_some_and(|after| self.created_at.elapsed() >= after)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::info("test");
        let n2 = Notification::info("test");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn severity_colors_are_distinct() {
        let colors = [
            Severity::Success.color(),
            Severity::Info.color(),
            Severity::Warning.color(),
            Severity::Error.color(),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn errors_wait_for_manual_dismiss() {
        assert!(Severity::Error.auto_dismiss_duration().is_none());
        assert!(!Notification::error("x").is_expired());
    }

    #[test]
    fn warnings_stay_longer_than_info() {
        assert!(
            Severity::Warning.auto_dismiss_duration() > Severity::Info.auto_dismiss_duration()
        );
    }

    #[test]
    fn zero_duration_expires_immediately() {
        let notification = Notification::info("x").auto_dismiss(Duration::ZERO);
        assert!(notification.is_expired());
    }

    #[test]
    fn text_interpolates_arguments() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        let notification = Notification::warning("notification-placeholders").with_arg("count", "3");
        assert_eq!(notification.severity(), Severity::Warning);
        assert_eq!(
            notification.text(&i18n),
            "3 thumbnails could not be downloaded and were replaced by placeholders."
        );
    }

    #[test]
    fn text_without_arguments() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        let notification = Notification::warning("notification-config-load-error");
        assert!(notification.message_args().is_empty());
        assert!(notification.text(&i18n).starts_with("The settings file"));
    }
}
