// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations use the Fluent localization system. Locale detection follows
//! CLI flag, then config file, then OS locale, then `en-US`.

pub mod fluent;
