// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Circular frame around the avatar preview.
pub fn preview_frame(theme: &Theme) -> container::Style {
    let is_light = matches!(theme, Theme::Light);

    container::Style {
        background: Some(Background::Color(if is_light {
            palette::GRAY_200
        } else {
            palette::GRAY_700
        })),
        border: Border {
            color: palette::WHITE,
            width: border::WIDTH_LG,
            radius: radius::FULL.into(),
        },
        shadow: shadow::LG,
        text_color: Some(palette::GRAY_500),
        ..Default::default()
    }
}

/// Fallback box shown in a tile whose image is loading or failed to load.
pub fn tile_placeholder(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        text_color: Some(palette.background.weak.text),
        ..Default::default()
    }
}
