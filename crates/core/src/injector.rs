//! Deterministic placeholder injection.
//!
//! [`inject`] is a pure function: identical (template, context) pairs
//! always produce byte-identical output. Rotating tokens select their
//! variant at `index mod len` of the slot's list; static lighting tokens
//! resolve from the per-vibe mood metadata. Every occurrence of a token is
//! substituted, not just the first.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::catalog;
use crate::error::CoreError;
use crate::rotation::RotationCursor;
use crate::style::FashionStyle;
use crate::token::{Category, PlaceholderToken};

/// Matches `{{TOKEN}}` placeholders. Token names are upper-case with
/// underscores and digits; anything else is left alone for the caller's
/// residual-marker checks to catch.
static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([A-Z][A-Z0-9_]*)\}\}").expect("valid regex"));

/// Everything injection needs to resolve one template.
///
/// Carries the catalog partition key (vibe + canonical style) and the
/// current raw rotation indices. Construction from a persisted cursor goes
/// through [`InjectionContext::with_cursor`].
#[derive(Debug, Clone)]
pub struct InjectionContext {
    pub vibe: String,
    pub style: FashionStyle,
    pub outfit_index: i32,
    pub location_index: i32,
    pub accessory_index: i32,
}

impl InjectionContext {
    /// Context at the zero position, as a first-ever generation sees it.
    pub fn new(vibe: impl Into<String>, style: FashionStyle) -> Self {
        Self {
            vibe: vibe.into(),
            style,
            outfit_index: 0,
            location_index: 0,
            accessory_index: 0,
        }
    }

    /// Context positioned at a persisted cursor's current indices.
    pub fn with_cursor(
        vibe: impl Into<String>,
        style: FashionStyle,
        cursor: &RotationCursor,
    ) -> Self {
        Self {
            vibe: vibe.into(),
            style,
            outfit_index: cursor.outfit_index,
            location_index: cursor.location_index,
            accessory_index: cursor.accessory_index,
        }
    }

    fn index_for(&self, category: Category) -> i32 {
        match category {
            Category::Outfit => self.outfit_index,
            Category::Location => self.location_index,
            Category::Accessory => self.accessory_index,
            Category::Lighting => 0,
        }
    }
}

/// Substitute every placeholder token in `template` with concrete text.
///
/// Two-pass: first resolve each distinct token name to its replacement
/// (failing on unknown categories or exhausted catalog fallbacks), then
/// replace all occurrences globally. Order of tokens in the template does
/// not affect which variant any token selects.
pub fn inject(template: &str, ctx: &InjectionContext) -> Result<String, CoreError> {
    let mut resolved: HashMap<String, &'static str> = HashMap::new();

    for caps in TOKEN_RE.captures_iter(template) {
        let name = &caps[1];
        if resolved.contains_key(name) {
            continue;
        }

        let token = PlaceholderToken::parse(name)?;
        let text = match token.category {
            Category::Lighting => catalog::lighting_descriptor(&ctx.vibe, name).ok_or_else(
                || CoreError::UnresolvedPlaceholder(format!("Unknown lighting token '{name}'")),
            )?,
            _ => {
                let variants = catalog::variants_for(&ctx.vibe, ctx.style, &token)?;
                let index = ctx.index_for(token.category).rem_euclid(variants.len() as i32);
                variants[index as usize]
            }
        };
        resolved.insert(name.to_string(), text);
    }

    let output = TOKEN_RE.replace_all(template, |caps: &regex::Captures| {
        match resolved.get(&caps[1]) {
            Some(text) => (*text).to_string(),
            None => caps[0].to_string(),
        }
    });

    Ok(output.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn ctx(outfit: i32, location: i32, accessory: i32) -> InjectionContext {
        InjectionContext {
            vibe: "luxury_dark_moody".to_string(),
            style: FashionStyle::Business,
            outfit_index: outfit,
            location_index: location,
            accessory_index: accessory,
        }
    }

    #[test]
    fn injection_is_deterministic() {
        let template = "{{OUTFIT_FULLBODY_1}} {{LOCATION_OUTDOOR_1}} {{LIGHTING_EVENING}}";
        let a = inject(template, &ctx(2, 1, 0)).unwrap();
        let b = inject(template, &ctx(2, 1, 0)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn no_residual_placeholders_for_known_tokens() {
        let template =
            "wearing {{OUTFIT_FULLBODY_1}}, {{LOCATION_INDOOR_1}}, with {{ACCESSORY_1}}, \
             {{LIGHTING_STUDIO}}";
        let output = inject(template, &ctx(0, 0, 0)).unwrap();
        assert!(!output.contains("{{"));
        assert!(!output.contains("}}"));
    }

    #[test]
    fn indices_zero_one_two_select_distinct_variants() {
        let template = "{{OUTFIT_FULLBODY_1}}";
        let outputs: Vec<String> = (0..3)
            .map(|i| inject(template, &ctx(i, 0, 0)).unwrap())
            .collect();
        assert_ne!(outputs[0], outputs[1]);
        assert_ne!(outputs[1], outputs[2]);
        assert_ne!(outputs[0], outputs[2]);
    }

    #[test]
    fn index_wraps_modulo_catalog_length() {
        let template = "{{OUTFIT_FULLBODY_1}}";
        let token = PlaceholderToken::parse("OUTFIT_FULLBODY_1").unwrap();
        let len = catalog::variants_for("luxury_dark_moody", FashionStyle::Business, &token)
            .unwrap()
            .len() as i32;
        let at_zero = inject(template, &ctx(0, 0, 0)).unwrap();
        let wrapped = inject(template, &ctx(len, 0, 0)).unwrap();
        assert_eq!(at_zero, wrapped);
    }

    #[test]
    fn repeated_token_substitutes_every_occurrence() {
        let template = "{{ACCESSORY_1}} and again {{ACCESSORY_1}}";
        let output = inject(template, &ctx(0, 0, 1)).unwrap();
        assert!(!output.contains("{{"));
        let halves: Vec<&str> = output.split(" and again ").collect();
        assert_eq!(halves[0], halves[1]);
    }

    #[test]
    fn distinct_slots_of_same_category_select_independently() {
        let output = inject(
            "{{OUTFIT_FULLBODY_1}} | {{OUTFIT_FULLBODY_2}}",
            &ctx(1, 0, 0),
        )
        .unwrap();
        let parts: Vec<&str> = output.split(" | ").collect();
        assert_ne!(parts[0], parts[1]);
    }

    #[test]
    fn categories_use_their_own_index() {
        let template = "{{OUTFIT_FULLBODY_1}} @ {{LOCATION_OUTDOOR_1}}";
        // Moving only the location index must leave the outfit unchanged.
        let a = inject(template, &ctx(1, 0, 0)).unwrap();
        let b = inject(template, &ctx(1, 2, 0)).unwrap();
        let (outfit_a, location_a) = a.split_once(" @ ").unwrap();
        let (outfit_b, location_b) = b.split_once(" @ ").unwrap();
        assert_eq!(outfit_a, outfit_b);
        assert_ne!(location_a, location_b);
    }

    #[test]
    fn unknown_category_token_fails() {
        let err = inject("{{WARDROBE_1}}", &ctx(0, 0, 0)).unwrap_err();
        assert_matches!(err, CoreError::UnresolvedPlaceholder(_));
    }

    #[test]
    fn unknown_lighting_token_fails() {
        let err = inject("{{LIGHTING_LASER}}", &ctx(0, 0, 0)).unwrap_err();
        assert_matches!(err, CoreError::UnresolvedPlaceholder(_));
    }

    #[test]
    fn unknown_slot_surfaces_catalog_missing() {
        let err = inject("{{OUTFIT_UNDERWATER_9}}", &ctx(0, 0, 0)).unwrap_err();
        assert_matches!(err, CoreError::CatalogMissing { .. });
    }

    #[test]
    fn template_without_tokens_passes_through() {
        let template = "plain prompt text, no tokens";
        assert_eq!(inject(template, &ctx(5, 5, 5)).unwrap(), template);
    }

    #[test]
    fn malformed_lowercase_marker_is_left_for_caller_detection() {
        let output = inject("{{not_a_token}}", &ctx(0, 0, 0)).unwrap();
        assert!(output.contains("{{not_a_token}}"));
    }

    #[test]
    fn scenario_indices_differ_only_in_rotating_segments() {
        let template = "{{OUTFIT_FULLBODY_1}} {{LOCATION_OUTDOOR_1}}";
        let s0 = inject(template, &ctx(0, 0, 0)).unwrap();
        let s1 = inject(template, &ctx(1, 1, 0)).unwrap();
        assert_ne!(s0, s1);
        assert!(!s0.contains("{{"));
        assert!(!s1.contains("{{"));
    }
}
