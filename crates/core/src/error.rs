use crate::style::FashionStyle;

/// Domain error taxonomy for the prompt-generation core.
///
/// All variants are data or caller errors; none are retryable. Storage
/// failures are not represented here; they surface from `lookbook-planner`
/// as its own error type.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The catalog has no variants for a token after exhausting the
    /// fallback chain. Indicates a data-authoring bug, not a runtime
    /// condition to recover from.
    #[error(
        "No catalog variants for token '{token}' under vibe '{vibe}', style '{style}' \
         (fallback chain exhausted)"
    )]
    CatalogMissing {
        vibe: String,
        style: FashionStyle,
        token: String,
    },

    /// A template references a token whose category cannot be determined.
    #[error("Unresolved placeholder: {0}")]
    UnresolvedPlaceholder(String),

    /// A caller requested a frame the injected template does not contain.
    #[error("Frame {requested} out of range: text contains {available} frame(s)")]
    FrameOutOfRange { requested: usize, available: usize },

    /// Generic input validation failure.
    #[error("Validation failed: {0}")]
    Validation(String),
}
