//! Placeholder token classification.
//!
//! Template tokens follow a fixed prefix convention: `OUTFIT_*`,
//! `LOCATION_*`, and `ACCESSORY_*` rotate through the catalog, while
//! `LIGHTING_*` resolves from static per-vibe metadata. The full token name
//! is the catalog slot key: `OUTFIT_FULLBODY_1` and `OUTFIT_FULLBODY_2`
//! are distinct entries, not the same list read twice.

use crate::error::CoreError;

/// Category of a placeholder token, determined by its name prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Outfit,
    Location,
    Accessory,
    Lighting,
}

impl Category {
    /// Whether tokens in this category draw from the rotating catalog.
    ///
    /// Non-rotating categories resolve from fixed metadata and ignore the
    /// rotation cursor entirely.
    pub fn is_rotating(&self) -> bool {
        !matches!(self, Category::Lighting)
    }
}

/// A classified placeholder token: the full slot name plus its category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderToken {
    /// Full token name as written in the template, e.g. `OUTFIT_FULLBODY_1`.
    pub name: String,
    pub category: Category,
}

impl PlaceholderToken {
    /// Classify a token name into a category by its prefix.
    ///
    /// Unknown prefixes are an error rather than a silent pass-through, so
    /// a typo in a template surfaces at injection time instead of leaking
    /// `{{...}}` markers into generated prompts.
    pub fn parse(name: &str) -> Result<Self, CoreError> {
        let category = if name.starts_with("OUTFIT_") {
            Category::Outfit
        } else if name.starts_with("LOCATION_") {
            Category::Location
        } else if name.starts_with("ACCESSORY") {
            Category::Accessory
        } else if name.starts_with("LIGHTING_") {
            Category::Lighting
        } else {
            return Err(CoreError::UnresolvedPlaceholder(format!(
                "Unknown category for token '{name}'"
            )));
        };

        Ok(PlaceholderToken {
            name: name.to_string(),
            category,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn outfit_prefix_classifies() {
        let token = PlaceholderToken::parse("OUTFIT_FULLBODY_1").unwrap();
        assert_eq!(token.category, Category::Outfit);
        assert_eq!(token.name, "OUTFIT_FULLBODY_1");
    }

    #[test]
    fn location_prefix_classifies() {
        let token = PlaceholderToken::parse("LOCATION_OUTDOOR_1").unwrap();
        assert_eq!(token.category, Category::Location);
    }

    #[test]
    fn accessory_prefix_classifies() {
        // Both bare "ACCESSORY_1" and qualified "ACCESSORY_JEWELRY_1" forms.
        let token = PlaceholderToken::parse("ACCESSORY_1").unwrap();
        assert_eq!(token.category, Category::Accessory);
        let token = PlaceholderToken::parse("ACCESSORY_JEWELRY_1").unwrap();
        assert_eq!(token.category, Category::Accessory);
    }

    #[test]
    fn lighting_is_not_rotating() {
        let token = PlaceholderToken::parse("LIGHTING_EVENING").unwrap();
        assert_eq!(token.category, Category::Lighting);
        assert!(!token.category.is_rotating());
    }

    #[test]
    fn rotating_categories_report_rotating() {
        assert!(Category::Outfit.is_rotating());
        assert!(Category::Location.is_rotating());
        assert!(Category::Accessory.is_rotating());
    }

    #[test]
    fn unknown_prefix_is_an_error() {
        let err = PlaceholderToken::parse("WARDROBE_1").unwrap_err();
        assert_matches!(err, CoreError::UnresolvedPlaceholder(_));
        assert!(err.to_string().contains("WARDROBE_1"));
    }
}
