// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the avatar selector.
//!
//! The `App` struct wires together the selector, localization and toast
//! notifications, and turns selector effects into side effects like the
//! native file dialog or applying the confirmed avatar.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::i18n::fluent::I18n;
use crate::ui::avatar_selector;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    selector: avatar_selector::State,
    theme_mode: ThemeMode,
    /// Directory of the last upload, reused by the next file dialog.
    last_upload_directory: Option<PathBuf>,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("selector", &self.selector)
            .field("theme_mode", &self.theme_mode)
            .field("last_upload_directory", &self.last_upload_directory)
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 720;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 820;
pub const MIN_WINDOW_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires Fn for boot; flags are consumed on the first call
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
        Self {
            i18n: I18n::default(),
            selector: avatar_selector::State::default(),
            theme_mode: ThemeMode::System,
            last_upload_directory: None,
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Loads configuration and localization, then starts fetching the preset
    /// images.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, flags.i18n_dir, &config);
        let (selector, boot_task) = avatar_selector::State::boot(&config.gallery);

        let mut app = App {
            i18n,
            selector,
            theme_mode: config.general.theme_mode,
            ..Self::default()
        };

        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(&key));
        }

        tracing::info!(
            locale = %app.i18n.current_locale(),
            columns = app.selector.columns(),
            "avatar picker started"
        );

        (app, boot_task.map(Message::Selector))
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.notifications.has_notifications())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            selector: &mut self.selector,
            notifications: &mut self.notifications,
            last_upload_directory: &mut self.last_upload_directory,
        };

        match message {
            Message::Selector(selector_message) => {
                update::handle_selector_message(&mut ctx, selector_message)
            }
            Message::UploadDialogResult(path) => update::handle_upload_dialog_result(&mut ctx, path),
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(_) => {
                self.notifications.tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            selector: &self.selector,
            notifications: &self.notifications,
        })
    }
}
