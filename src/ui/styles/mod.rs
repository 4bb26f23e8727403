// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the picker widgets.

pub mod button;
pub mod container;
