// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::avatar_selector;
use crate::ui::notifications;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Selector(avatar_selector::Message),
    Notification(notifications::NotificationMessage),
    /// Result from the upload file dialog; `None` when cancelled.
    UploadDialogResult(Option<PathBuf>),
    /// Periodic tick for toast auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `AVATAR_PICKER_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
