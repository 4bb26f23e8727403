// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared visual constants for the avatar picker.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes (preview, gallery tiles, toasts)
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use avatar_picker::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let ring = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::ACCENT_400
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_500: Color = Color::from_rgb(0.42, 0.45, 0.5);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_300: Color = Color::from_rgb(0.82, 0.84, 0.86);
    pub const GRAY_200: Color = Color::from_rgb(0.9, 0.91, 0.92);
    pub const GRAY_100: Color = Color::from_rgb(0.95, 0.95, 0.96);

    // Accent (purple scale)
    pub const ACCENT_400: Color = Color::from_rgb(0.753, 0.518, 0.988);
    pub const ACCENT_600: Color = Color::from_rgb(0.576, 0.2, 0.918);
    pub const ACCENT_700: Color = Color::from_rgb(0.494, 0.133, 0.808);

    // Confirm action (green scale)
    pub const CONFIRM_600: Color = Color::from_rgb(0.086, 0.639, 0.29);
    pub const CONFIRM_700: Color = Color::from_rgb(0.082, 0.502, 0.239);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Side of the circular preview frame.
    pub const AVATAR_PREVIEW: f32 = 128.0;

    /// Side of a gallery tile image.
    pub const THUMBNAIL: f32 = 140.0;

    /// Width of the central picker column.
    pub const PICKER_WIDTH: f32 = 576.0;

    pub const TOAST_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Page heading
    pub const TITLE_MD: f32 = 20.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Small body - Category descriptions, tile labels
    pub const BODY_SM: f32 = 13.0;

    /// Glyph next to a category name
    pub const GLYPH: f32 = 16.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;

    /// Toast accents
    pub const WIDTH_MD: f32 = 2.0;

    /// Preview frame and selected tile ring
    pub const WIDTH_LG: f32 = 4.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill / circle
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);

    assert!(typography::TITLE_MD > typography::BODY);
    assert!(typography::BODY > typography::BODY_SM);

    assert!(border::WIDTH_LG > border::WIDTH_MD);
    assert!(border::WIDTH_MD > border::WIDTH_SM);

    // Three tiles plus gaps must fit the picker column
    assert!(sizing::THUMBNAIL * 3.0 + spacing::MD * 2.0 <= sizing::PICKER_WIDTH);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn preview_ring_fits_inside_preview() {
        assert!(border::WIDTH_LG * 2.0 < sizing::AVATAR_PREVIEW);
    }
}
