// SPDX-License-Identifier: MPL-2.0
//! Built-in preset avatar catalog.
//!
//! The catalog is an immutable lookup table built once on first access.
//! Category order and preset order are both user-visible (category switcher
//! and gallery grid), so they are stored as ordered vectors rather than maps.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Identifier of a preset category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryKey {
    Avataaars,
    BigSmile,
}

impl CategoryKey {
    /// All keys in catalog order.
    pub const ALL: [CategoryKey; 2] = [CategoryKey::Avataaars, CategoryKey::BigSmile];

    /// Stable string form of the key.
    pub fn as_str(self) -> &'static str {
        match self {
            CategoryKey::Avataaars => "avataaars",
            CategoryKey::BigSmile => "bigSmile",
        }
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| format!("unknown avatar category: {s}"))
    }
}

/// A predefined, remotely hosted avatar image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset {
    image_reference: String,
    label: &'static str,
}

impl Preset {
    fn dicebear(style: &str, seed: &str, label: &'static str) -> Self {
        Self {
            image_reference: format!("{DICEBEAR_BASE_URL}/{style}/svg?seed={seed}"),
            label,
        }
    }

    /// Locator of the image (a URL).
    pub fn image_reference(&self) -> &str {
        &self.image_reference
    }

    /// Human-readable name.
    pub fn label(&self) -> &'static str {
        self.label
    }
}

/// A named, ordered group of presets sharing a visual style.
#[derive(Debug, Clone)]
pub struct Category {
    key: CategoryKey,
    display_name: &'static str,
    icon_glyph: &'static str,
    description: &'static str,
    presets: Vec<Preset>,
}

impl Category {
    pub fn key(&self) -> CategoryKey {
        self.key
    }

    pub fn display_name(&self) -> &'static str {
        self.display_name
    }

    pub fn icon_glyph(&self) -> &'static str {
        self.icon_glyph
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Presets in gallery order. Never empty.
    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    /// Returns whether `reference` names one of this category's presets.
    pub fn contains(&self, reference: &str) -> bool {
        self.presets
            .iter()
            .any(|preset| preset.image_reference() == reference)
    }
}

const DICEBEAR_BASE_URL: &str = "https://api.dicebear.com/7.x";

/// Read-only table of every preset category.
#[derive(Debug)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    fn builtin() -> Self {
        let categories = vec![
            Category {
                key: CategoryKey::Avataaars,
                display_name: "Avataaars",
                icon_glyph: "👤",
                description: "Colorful cartoon-style avatars",
                presets: vec![
                    Preset::dicebear("avataaars", "Felix", "Happy Felix"),
                    Preset::dicebear("avataaars", "Jasper", "Cool Jasper"),
                    Preset::dicebear("avataaars", "Luna", "Cheerful Luna"),
                ],
            },
            Category {
                key: CategoryKey::BigSmile,
                display_name: "Big Smile",
                icon_glyph: "😊",
                description: "Always happy and smiling",
                presets: vec![
                    Preset::dicebear("big-smile", "Happy", "Joyful Happy"),
                    Preset::dicebear("big-smile", "Sparkle", "Radiant Sparkle"),
                    Preset::dicebear("big-smile", "Glow", "Golden Glow"),
                ],
            },
        ];

        debug_assert!(categories.iter().all(|c| !c.presets.is_empty()));
        debug_assert_eq!(categories.len(), CategoryKey::ALL.len());

        Self { categories }
    }

    /// Categories in display order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// The category selected when the picker opens.
    pub fn first(&self) -> &Category {
        &self.categories[0]
    }

    /// Looks up a category. Total over [`CategoryKey`].
    pub fn category(&self, key: CategoryKey) -> &Category {
        self.categories
            .iter()
            .find(|category| category.key == key)
            .unwrap_or_else(|| self.first())
    }

    /// Finds a preset by its image reference.
    pub fn preset(&self, reference: &str) -> Option<&Preset> {
        self.all_presets()
            .find(|preset| preset.image_reference() == reference)
    }

    /// Iterates every preset of every category, in display order.
    pub fn all_presets(&self) -> impl Iterator<Item = &Preset> {
        self.categories
            .iter()
            .flat_map(|category| category.presets.iter())
    }
}

/// Returns the shared built-in catalog.
pub fn catalog() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(Catalog::builtin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_follow_declaration_order() {
        let keys: Vec<_> = catalog().categories().iter().map(Category::key).collect();
        assert_eq!(keys, CategoryKey::ALL.to_vec());
        assert_eq!(catalog().first().key(), CategoryKey::Avataaars);
    }

    #[test]
    fn every_category_has_presets() {
        for category in catalog().categories() {
            assert!(!category.presets().is_empty(), "{} is empty", category.key());
        }
    }

    #[test]
    fn presets_keep_gallery_order() {
        let labels: Vec<_> = catalog()
            .category(CategoryKey::BigSmile)
            .presets()
            .iter()
            .map(Preset::label)
            .collect();
        assert_eq!(labels, ["Joyful Happy", "Radiant Sparkle", "Golden Glow"]);
    }

    #[test]
    fn preset_references_are_dicebear_urls() {
        let felix = &catalog().category(CategoryKey::Avataaars).presets()[0];
        assert_eq!(
            felix.image_reference(),
            "https://api.dicebear.com/7.x/avataaars/svg?seed=Felix"
        );
        assert!(catalog()
            .category(CategoryKey::Avataaars)
            .contains(felix.image_reference()));
        assert!(!catalog()
            .category(CategoryKey::BigSmile)
            .contains(felix.image_reference()));
    }

    #[test]
    fn category_metadata_matches_catalog() {
        let big_smile = catalog().category(CategoryKey::BigSmile);
        assert_eq!(big_smile.display_name(), "Big Smile");
        assert_eq!(big_smile.icon_glyph(), "😊");
        assert_eq!(big_smile.description(), "Always happy and smiling");
    }

    #[test]
    fn category_key_parses_from_its_string_form() {
        for key in CategoryKey::ALL {
            assert_eq!(key.as_str().parse::<CategoryKey>(), Ok(key));
        }
        assert!("bigsmile".parse::<CategoryKey>().is_err());
    }

    #[test]
    fn preset_lookup_by_reference() {
        let luna = &catalog().category(CategoryKey::Avataaars).presets()[2];
        assert_eq!(
            catalog().preset(luna.image_reference()).map(Preset::label),
            Some("Cheerful Luna")
        );
        assert!(catalog().preset("felix.svg").is_none());
    }

    #[test]
    fn all_presets_spans_every_category() {
        assert_eq!(catalog().all_presets().count(), 6);
    }
}
