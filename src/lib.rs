// SPDX-License-Identifier: MPL-2.0
//! `avatar_picker` is a profile avatar selector built with the Iced GUI
//! framework.
//!
//! Users pick one of the preset illustrations grouped by category, or upload
//! their own image, preview it and confirm it as their avatar.

pub mod app;
pub mod avatar;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;
