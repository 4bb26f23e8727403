// SPDX-License-Identifier: MPL-2.0
//! In-memory avatar selection state.
//!
//! A preset reference and an uploaded image are mutually exclusive, so the
//! pair is stored as a single [`Choice`]; there is no way to hold both.

use super::catalog::{catalog, CategoryKey};
use super::upload::DataUrl;

/// What the user has picked so far.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum Choice {
    #[default]
    Nothing,
    Preset(String),
    Upload(DataUrl),
}

/// The avatar shown in the preview and eligible for confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentAvatar<'a> {
    Preset(&'a str),
    Uploaded(&'a DataUrl),
}

impl<'a> CurrentAvatar<'a> {
    /// Image source string: the preset URL or the data URL.
    pub fn source(&self) -> &'a str {
        match self {
            CurrentAvatar::Preset(reference) => reference,
            CurrentAvatar::Uploaded(data) => data.as_str(),
        }
    }

    /// Detaches the value so it can travel in a message.
    pub fn to_confirmed(&self) -> ConfirmedAvatar {
        match self {
            CurrentAvatar::Preset(reference) => ConfirmedAvatar::Preset(reference.to_string()),
            CurrentAvatar::Uploaded(data) => ConfirmedAvatar::Uploaded((*data).clone()),
        }
    }
}

/// Owned avatar handed to the apply collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmedAvatar {
    Preset(String),
    Uploaded(DataUrl),
}

impl ConfirmedAvatar {
    pub fn source(&self) -> &str {
        match self {
            ConfirmedAvatar::Preset(reference) => reference,
            ConfirmedAvatar::Uploaded(data) => data.as_str(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    active_category: CategoryKey,
    choice: Choice,
}

impl Default for Selection {
    fn default() -> Self {
        Self::new()
    }
}

impl Selection {
    /// Fresh state: first catalog category, nothing picked.
    pub fn new() -> Self {
        Self {
            active_category: catalog().first().key(),
            choice: Choice::Nothing,
        }
    }

    pub fn active_category(&self) -> CategoryKey {
        self.active_category
    }

    pub fn selected_preset(&self) -> Option<&str> {
        match &self.choice {
            Choice::Preset(reference) => Some(reference),
            _ => None,
        }
    }

    pub fn uploaded_image(&self) -> Option<&DataUrl> {
        match &self.choice {
            Choice::Upload(data) => Some(data),
            _ => None,
        }
    }

    /// Switches the displayed gallery. The current pick is kept.
    pub fn select_category(&mut self, key: CategoryKey) {
        self.active_category = key;
    }

    /// Picks a preset, discarding any uploaded image.
    pub fn select_preset(&mut self, reference: impl Into<String>) {
        self.choice = Choice::Preset(reference.into());
    }

    /// Stores a decoded upload, discarding any preset pick.
    ///
    /// Called once per completed decode; the latest call wins.
    pub fn apply_upload(&mut self, data: DataUrl) {
        self.choice = Choice::Upload(data);
    }

    /// Upload if present, else preset, else nothing.
    pub fn current_avatar(&self) -> Option<CurrentAvatar<'_>> {
        match &self.choice {
            Choice::Nothing => None,
            Choice::Preset(reference) => Some(CurrentAvatar::Preset(reference)),
            Choice::Upload(data) => Some(CurrentAvatar::Uploaded(data)),
        }
    }

    pub fn can_confirm(&self) -> bool {
        self.current_avatar().is_some()
    }
}
