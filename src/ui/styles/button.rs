// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action (upload).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette::ACCENT_700,
        _ => palette::ACCENT_600,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::SM,
        snap: true,
    }
}

/// Apply/confirm action.
pub fn confirm(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette::CONFIRM_700,
        _ => palette::CONFIRM_600,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        snap: true,
    }
}

/// Category switcher pill. The active category is filled with the accent.
pub fn category_pill(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let is_light = matches!(theme, Theme::Light);

        let (background, text_color) = if active {
            (palette::ACCENT_600, WHITE)
        } else if is_light {
            (palette::GRAY_200, palette::GRAY_900)
        } else {
            (palette::GRAY_700, WHITE)
        };

        let background = match status {
            button::Status::Hovered if !active => {
                if is_light {
                    palette::GRAY_300
                } else {
                    palette::GRAY_500
                }
            }
            _ => background,
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Gallery tile. A selected tile gets a thick accent ring.
pub fn preset_tile(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let base = theme.extended_palette().background.base;

        let border = if selected {
            Border {
                color: palette::ACCENT_400,
                width: border::WIDTH_LG,
                radius: radius::MD.into(),
            }
        } else {
            Border {
                color: palette::GRAY_300,
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            }
        };

        let background = match status {
            button::Status::Hovered | button::Status::Pressed => Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::ACCENT_400
            },
            _ => base.color,
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: base.text,
            border,
            shadow: if matches!(status, button::Status::Hovered) {
                shadow::MD
            } else {
                shadow::NONE
            },
            snap: true,
        }
    }
}
