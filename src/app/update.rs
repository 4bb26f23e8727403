// SPDX-License-Identifier: MPL-2.0
//! Update handlers that turn selector effects into side effects.

use super::Message;
use crate::avatar::{ConfirmedAvatar, FileHandle};
use crate::ui::avatar_selector::{self, Effect};
use crate::ui::notifications::{self, Notification};
use iced::Task;
use std::path::PathBuf;

/// Mutable view of the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub selector: &'a mut avatar_selector::State,
    pub notifications: &'a mut notifications::Manager,
    pub last_upload_directory: &'a mut Option<PathBuf>,
}

/// Forwards a message to the selector and applies the returned effect.
pub fn handle_selector_message(
    ctx: &mut UpdateContext<'_>,
    message: avatar_selector::Message,
) -> Task<Message> {
    let (effect, task) = ctx.selector.update(message);
    let task = task.map(Message::Selector);

    let effect_task = match effect {
        Effect::None => Task::none(),
        Effect::OpenUploadDialog => handle_open_upload_dialog(ctx.last_upload_directory.clone()),
        Effect::UploadRejected { error, file_name } => {
            ctx.notifications
                .push(Notification::error(error.i18n_key()).with_arg("filename", file_name));
            Task::none()
        }
        Effect::UploadFailed(_) => {
            ctx.notifications
                .push(Notification::error("notification-upload-read-error"));
            Task::none()
        }
        Effect::UploadApplied => {
            ctx.notifications.clear_upload_notices();
            ctx.notifications
                .push(Notification::info("notification-upload-ready"));
            Task::none()
        }
        Effect::Confirmed(avatar) => {
            apply_avatar(&avatar);
            ctx.notifications
                .push(Notification::success("notification-avatar-applied"));
            Task::none()
        }
    };

    Task::batch([task, effect_task])
}

/// Opens the native picker. No extension filter: validation decides.
pub fn handle_open_upload_dialog(last_directory: Option<PathBuf>) -> Task<Message> {
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new().set_title("Upload custom image");

            if let Some(dir) = last_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog.pick_file().await.map(|h| h.path().to_path_buf())
        },
        Message::UploadDialogResult,
    )
}

/// Remembers the directory and hands the file to the selector.
pub fn handle_upload_dialog_result(
    ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
) -> Task<Message> {
    if let Some(parent) = path.as_deref().and_then(|p| p.parent()) {
        *ctx.last_upload_directory = Some(parent.to_path_buf());
    }

    let file = path.map(FileHandle::from_path);
    handle_selector_message(ctx, avatar_selector::Message::UploadChosen(file))
}

/// Hands the confirmed avatar to the profile collaborator.
///
/// There is no remote profile store; the confirmation is recorded in the log.
fn apply_avatar(avatar: &ConfirmedAvatar) {
    match avatar {
        ConfirmedAvatar::Preset(reference) => {
            tracing::info!(%reference, "preset avatar applied");
        }
        ConfirmedAvatar::Uploaded(data) => {
            tracing::info!(
                mime = data.mime(),
                encoded_len = data.as_str().len(),
                "uploaded avatar applied"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::avatar::DataUrl;
    use crate::config::GalleryConfig;
    use crate::ui::notifications::Severity;

    struct Fixture {
        selector: avatar_selector::State,
        notifications: notifications::Manager,
        last_upload_directory: Option<PathBuf>,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                selector: avatar_selector::State::new(&GalleryConfig::default()),
                notifications: notifications::Manager::new(),
                last_upload_directory: None,
            }
        }

        fn ctx(&mut self) -> UpdateContext<'_> {
            UpdateContext {
                selector: &mut self.selector,
                notifications: &mut self.notifications,
                last_upload_directory: &mut self.last_upload_directory,
            }
        }
    }

    #[test]
    fn rejected_upload_shows_error_toast() {
        let mut fixture = Fixture::new();
        let _ = handle_upload_dialog_result(
            &mut fixture.ctx(),
            Some(PathBuf::from("/home/user/docs/report.pdf")),
        );

        let toast = fixture
            .notifications
            .visible()
            .next()
            .expect("an error toast");
        assert_eq!(toast.severity(), Severity::Error);
        assert_eq!(toast.message_key(), "notification-upload-not-an-image");
        assert_eq!(
            toast.message_args(),
            &[("filename".to_string(), "report.pdf".to_string())]
        );
        assert_eq!(
            fixture.last_upload_directory,
            Some(PathBuf::from("/home/user/docs"))
        );
        assert!(fixture.selector.selection().current_avatar().is_none());
    }

    #[test]
    fn cancelled_dialog_changes_nothing() {
        let mut fixture = Fixture::new();
        let _ = handle_upload_dialog_result(&mut fixture.ctx(), None);

        assert!(!fixture.notifications.has_notifications());
        assert!(fixture.last_upload_directory.is_none());
    }

    #[test]
    fn confirmation_shows_success_toast() {
        let mut fixture = Fixture::new();
        let _ = handle_selector_message(
            &mut fixture.ctx(),
            avatar_selector::Message::PresetSelected("felix.svg".into()),
        );
        let _ = handle_selector_message(&mut fixture.ctx(), avatar_selector::Message::ApplyPressed);

        let toast = fixture.notifications.visible().next().expect("a toast");
        assert_eq!(toast.severity(), Severity::Success);
        assert_eq!(toast.message_key(), "notification-avatar-applied");
    }

    #[test]
    fn successful_upload_replaces_stale_errors_with_hint() {
        let mut fixture = Fixture::new();
        let _ = handle_upload_dialog_result(
            &mut fixture.ctx(),
            Some(PathBuf::from("/tmp/notes.txt")),
        );
        assert_eq!(fixture.notifications.visible_count(), 1);

        let payload = DataUrl::encode("image/png", b"png");
        let _ = handle_selector_message(
            &mut fixture.ctx(),
            avatar_selector::Message::UploadDecoded(Ok(payload)),
        );

        let toasts: Vec<_> = fixture.notifications.visible().collect();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].severity(), Severity::Info);
        assert_eq!(toasts[0].message_key(), "notification-upload-ready");
    }

    #[test]
    fn repeated_uploads_keep_a_single_hint() {
        let mut fixture = Fixture::new();
        for bytes in [&b"one"[..], &b"two"[..]] {
            let _ = handle_selector_message(
                &mut fixture.ctx(),
                avatar_selector::Message::UploadDecoded(Ok(DataUrl::encode("image/png", bytes))),
            );
        }

        assert_eq!(fixture.notifications.visible_count(), 1);
    }
}
