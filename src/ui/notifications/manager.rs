// SPDX-License-Identifier: MPL-2.0
//! Toast queue.
//!
//! At most [`MAX_VISIBLE`] toasts are on screen; the rest wait in a queue
//! and are promoted as visible ones expire or are dismissed.

use super::notification::{Notification, NotificationId, Severity};
use std::collections::VecDeque;

pub const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
    /// Periodic check of auto-dismiss timers.
    Tick,
}

#[derive(Debug, Default)]
pub struct Manager {
    /// Newest first.
    visible: VecDeque<Notification>,
    queue: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        match notification.severity() {
            Severity::Warning | Severity::Error => {
                tracing::warn!(key = notification.message_key(), "notification");
            }
            Severity::Success | Severity::Info => {
                tracing::debug!(key = notification.message_key(), "notification");
            }
        }

        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue();
            return true;
        }
        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }
        false
    }

    /// Drops expired toasts.
    pub fn tick(&mut self) {
        let before = self.visible.len();
        self.visible.retain(|n| !n.is_expired());
        if self.visible.len() < before {
            self.promote_from_queue();
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick => self.tick(),
        }
    }

    /// Removes every toast, visible or queued, with the given message key.
    ///
    /// A new fetch uses this so a placeholder warning from the previous
    /// batch does not linger next to the new one.
    pub fn clear_key(&mut self, key: &str) {
        let before = self.visible.len();
        self.visible.retain(|n| n.message_key() != key);
        self.queue.retain(|n| n.message_key() != key);
        if self.visible.len() < before {
            self.promote_from_queue();
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    fn promote_from_queue(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            let Some(notification) = self.queue.pop_front() else {
                break;
            };
            self.visible.push_back(notification);
        }
    }
}
