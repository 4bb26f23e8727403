// SPDX-License-Identifier: MPL-2.0
//! Avatar selector component.
//!
//! Owns the [`Selection`] and the view-side caches (preset thumbnails and the
//! decoded upload preview). Side effects the component cannot perform itself
//! (file dialog, notifications, applying the avatar) are reported to the
//! parent as an [`Effect`].

mod thumbnails;
mod view;

pub use thumbnails::{fetch_preset, Thumbnail, Thumbnails};
pub use view::ViewContext;

use crate::avatar::upload::{self, DataUrl, FileHandle};
use crate::avatar::{catalog, CategoryKey, ConfirmedAvatar, CurrentAvatar, Selection};
use crate::config::GalleryConfig;
use crate::error::{Error, ValidationError};
use iced::widget::{image, svg};
use iced::Task;

#[derive(Debug, Clone)]
pub enum Message {
    CategorySelected(CategoryKey),
    PresetSelected(String),
    UploadPressed,
    /// Result of the file picker; `None` when cancelled.
    UploadChosen(Option<FileHandle>),
    UploadDecoded(Result<DataUrl, Error>),
    ApplyPressed,
    PresetImageLoaded {
        reference: String,
        result: Result<Vec<u8>, Error>,
    },
}

/// Requests propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    OpenUploadDialog,
    /// The chosen file is not an image. Nothing changed.
    UploadRejected {
        error: ValidationError,
        file_name: String,
    },
    /// The file passed validation but could not be read.
    UploadFailed(String),
    /// A decoded upload became the current avatar.
    UploadApplied,
    /// The user confirmed the current avatar.
    Confirmed(ConfirmedAvatar),
}

/// Renderable form of an uploaded image.
#[derive(Debug, Clone)]
pub(crate) enum UploadPreview {
    Svg(svg::Handle),
    Raster(image::Handle),
}

impl UploadPreview {
    fn from_data_url(data: &DataUrl) -> Option<Self> {
        let bytes = data.to_bytes()?;
        Some(if data.is_svg() {
            UploadPreview::Svg(svg::Handle::from_memory(bytes))
        } else {
            UploadPreview::Raster(image::Handle::from_bytes(bytes))
        })
    }
}

/// What the preview frame or a gallery tile draws.
#[derive(Debug, Clone)]
pub(crate) enum Picture<'a> {
    Svg(&'a svg::Handle),
    Raster(&'a image::Handle),
    /// Preset image still downloading.
    Loading,
    /// Preset image unavailable; its label stands in.
    Label(&'static str),
    /// An avatar exists but cannot be drawn.
    Unavailable,
    /// No current avatar.
    Empty,
}

#[derive(Debug)]
pub struct State {
    selection: Selection,
    thumbnails: Thumbnails,
    upload_preview: Option<UploadPreview>,
    pending_uploads: usize,
    columns: u16,
}

impl Default for State {
    fn default() -> Self {
        Self::new(&GalleryConfig::default())
    }
}

impl State {
    pub fn new(gallery: &GalleryConfig) -> Self {
        Self {
            selection: Selection::new(),
            thumbnails: Thumbnails::default(),
            upload_preview: None,
            pending_uploads: 0,
            columns: gallery.effective_columns(),
        }
    }

    /// Builds the component and, when enabled, starts fetching preset images.
    pub fn boot(gallery: &GalleryConfig) -> (Self, Task<Message>) {
        let mut state = Self::new(gallery);
        let task = if gallery.should_fetch_presets() {
            state.thumbnails.fetch_all(catalog())
        } else {
            Task::none()
        };
        (state, task)
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn thumbnails(&self) -> &Thumbnails {
        &self.thumbnails
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    /// Whether at least one upload is still being decoded.
    pub fn is_decoding(&self) -> bool {
        self.pending_uploads > 0
    }

    /// Whether the apply control is shown.
    pub fn can_confirm(&self) -> bool {
        self.selection.can_confirm()
    }

    pub(crate) fn upload_preview(&self) -> Option<&UploadPreview> {
        self.upload_preview.as_ref()
    }

    /// Picture for the preview frame.
    pub(crate) fn preview(&self) -> Picture<'_> {
        match self.selection.current_avatar() {
            Some(CurrentAvatar::Uploaded(_)) => match self.upload_preview() {
                Some(UploadPreview::Svg(handle)) => Picture::Svg(handle),
                Some(UploadPreview::Raster(handle)) => Picture::Raster(handle),
                None => Picture::Unavailable,
            },
            Some(CurrentAvatar::Preset(reference)) => self.preset_picture(reference),
            None => Picture::Empty,
        }
    }

    /// Picture for a preset reference, falling back to the preset label.
    ///
    /// References outside the catalog have no label and are unavailable.
    pub(crate) fn preset_picture(&self, reference: &str) -> Picture<'_> {
        match self.thumbnails.get(reference) {
            Some(Thumbnail::Ready(handle)) => Picture::Svg(handle),
            Some(Thumbnail::Loading) => Picture::Loading,
            Some(Thumbnail::Failed) | None => catalog()
                .preset(reference)
                .map_or(Picture::Unavailable, |preset| Picture::Label(preset.label())),
        }
    }

    pub fn update(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::CategorySelected(key) => {
                tracing::debug!(category = %key, "category selected");
                self.selection.select_category(key);
                (Effect::None, Task::none())
            }
            Message::PresetSelected(reference) => {
                let in_catalog = catalog()
                    .categories()
                    .iter()
                    .any(|category| category.contains(&reference));
                tracing::debug!(%reference, in_catalog, "preset selected");
                self.selection.select_preset(reference);
                self.upload_preview = None;
                (Effect::None, Task::none())
            }
            Message::UploadPressed => (Effect::OpenUploadDialog, Task::none()),
            Message::UploadChosen(None) => (Effect::None, Task::none()),
            Message::UploadChosen(Some(file)) => self.begin_upload(file),
            Message::UploadDecoded(result) => {
                self.pending_uploads = self.pending_uploads.saturating_sub(1);
                match result {
                    Ok(data) => {
                        self.upload_preview = UploadPreview::from_data_url(&data);
                        self.selection.apply_upload(data);
                        (Effect::UploadApplied, Task::none())
                    }
                    Err(err) => {
                        tracing::error!(%err, "failed to read upload");
                        (Effect::UploadFailed(err.to_string()), Task::none())
                    }
                }
            }
            Message::ApplyPressed => match self.selection.current_avatar() {
                Some(current) => (Effect::Confirmed(current.to_confirmed()), Task::none()),
                None => {
                    tracing::debug!("apply ignored without a current avatar");
                    (Effect::None, Task::none())
                }
            },
            Message::PresetImageLoaded { reference, result } => {
                self.thumbnails.store(reference, result);
                (Effect::None, Task::none())
            }
        }
    }

    /// Validates the chosen file and starts decoding it.
    ///
    /// Concurrent decodes are not cancelled; each completion is applied as it
    /// arrives.
    fn begin_upload(&mut self, file: FileHandle) -> (Effect, Task<Message>) {
        if let Err(error) = upload::validate(&file) {
            tracing::warn!(path = %file.path().display(), %error, "upload rejected");
            return (
                Effect::UploadRejected {
                    error,
                    file_name: file.file_name(),
                },
                Task::none(),
            );
        }

        self.pending_uploads += 1;
        (
            Effect::None,
            Task::perform(upload::decode(file), Message::UploadDecoded),
        )
    }
}
