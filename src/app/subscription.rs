// SPDX-License-Identifier: MPL-2.0
//! Timer subscriptions.
//!
//! Both timers exist only while they have work to do. Dropping the
//! subscription stops the timer, so toggling play/pause never stacks timers.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Toast auto-dismiss check interval.
const NOTIFICATION_TICK: Duration = Duration::from_millis(100);

/// Emits `SlideshowTick` every `interval` while `active`.
pub fn create_slideshow_subscription(active: bool, interval: Duration) -> Subscription<Message> {
    if active {
        time::every(interval).map(Message::SlideshowTick)
    } else {
        Subscription::none()
    }
}

/// Emits `Tick` while toasts are visible or queued.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(NOTIFICATION_TICK).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
