// SPDX-License-Identifier: MPL-2.0
//! Avatar domain: the preset catalog, the selection state and the upload
//! pipeline. Nothing here depends on Iced.

pub mod catalog;
pub mod selection;
pub mod upload;

pub use catalog::{catalog, Catalog, Category, CategoryKey, Preset};
pub use selection::{ConfirmedAvatar, CurrentAvatar, Selection};
pub use upload::{DataUrl, FileHandle};
