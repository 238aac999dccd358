//! Fashion style normalization.
//!
//! User-facing style strings arrive in whatever shape the onboarding flow
//! captured them ("Business Professional", "  Streetwear ", "classic &
//! elegant"). The catalog is keyed by a closed set of canonical styles, so
//! everything funnels through [`FashionStyle::resolve`] before lookup.
//! Resolution is total: unknown input falls back to [`DEFAULT_STYLE`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical style used everywhere a raw style string does not match.
pub const DEFAULT_STYLE: FashionStyle = FashionStyle::Casual;

/// Canonical fashion style keys for catalog partitioning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FashionStyle {
    Business,
    Casual,
    Trendy,
    Timeless,
}

impl FashionStyle {
    /// All canonical styles, in catalog order.
    pub const ALL: &'static [FashionStyle] = &[
        FashionStyle::Business,
        FashionStyle::Casual,
        FashionStyle::Trendy,
        FashionStyle::Timeless,
    ];

    /// The canonical key as stored in the rotation-state table.
    pub fn as_str(&self) -> &'static str {
        match self {
            FashionStyle::Business => "business",
            FashionStyle::Casual => "casual",
            FashionStyle::Trendy => "trendy",
            FashionStyle::Timeless => "timeless",
        }
    }

    /// Normalize a raw user-facing style string to a canonical style.
    ///
    /// Applies, in order: trim + lowercase, exact alias lookup, keyword
    /// fallback, then [`DEFAULT_STYLE`]. Never fails.
    pub fn resolve(raw: &str) -> FashionStyle {
        let normalized = raw.trim().to_lowercase();

        // Exact alias table.
        match normalized.as_str() {
            "business" | "business professional" | "professional" | "corporate" | "office"
            | "workwear" => return FashionStyle::Business,
            "casual" | "everyday" | "relaxed" | "weekend" | "comfortable" => {
                return FashionStyle::Casual
            }
            "trendy" | "streetwear" | "street style" | "edgy" | "fashion forward"
            | "fashion-forward" => return FashionStyle::Trendy,
            "timeless" | "classic" | "elegant" | "minimalist" | "refined" => {
                return FashionStyle::Timeless
            }
            _ => {}
        }

        // Keyword fallback for compound labels ("smart business attire").
        if ["business", "corporate", "formal", "professional", "office"]
            .iter()
            .any(|kw| normalized.contains(kw))
        {
            return FashionStyle::Business;
        }
        if ["trend", "street", "edgy", "bold"]
            .iter()
            .any(|kw| normalized.contains(kw))
        {
            return FashionStyle::Trendy;
        }
        if ["timeless", "classic", "elegant", "minimal"]
            .iter()
            .any(|kw| normalized.contains(kw))
        {
            return FashionStyle::Timeless;
        }
        if normalized.contains("casual") {
            return FashionStyle::Casual;
        }

        DEFAULT_STYLE
    }
}

impl fmt::Display for FashionStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
