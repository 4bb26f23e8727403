// SPDX-License-Identifier: MPL-2.0
//! Time subscriptions for the application.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Interval between auto-dismiss checks while toasts are shown.
const TOAST_TICK_INTERVAL: Duration = Duration::from_millis(500);

/// Ticks only while there is a toast to expire.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(TOAST_TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
