// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! Components follow the Elm-style "state down, messages up" pattern.
//!
//! - [`avatar_selector`] - Preview, category switcher, preset gallery and upload
//! - [`notifications`] - Toast notification system for user feedback
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod avatar_selector;
pub mod design_tokens;
pub mod notifications;
pub mod styles;
pub mod theming;
