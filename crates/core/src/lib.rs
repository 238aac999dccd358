//! Lookbook domain core.
//!
//! Pure, I/O-free building blocks for photo-shoot feed prompt generation:
//!
//! - [`style`] — normalization of raw fashion-style strings to canonical keys.
//! - [`catalog`] — per-vibe, per-style variant lists for rotating placeholders,
//!   plus static lighting metadata.
//! - [`token`] — classification of `{{TOKEN}}` names into categories.
//! - [`injector`] — deterministic placeholder substitution.
//! - [`frames`] — slicing an injected template into per-frame prompts.
//! - [`templates`] — the built-in blueprint photoshoot templates per vibe.
//! - [`rotation`] — the rotation cursor value type and step constant.
//!
//! Persistence of rotation cursors lives in `lookbook-db`; orchestration of
//! the two lives in `lookbook-planner`. Nothing in this crate performs I/O.

pub mod catalog;
pub mod error;
pub mod frames;
pub mod injector;
pub mod rotation;
pub mod style;
pub mod templates;
pub mod token;
pub mod types;

pub use error::CoreError;
pub use frames::{extract_frame, frame_count};
pub use injector::{inject, InjectionContext};
pub use rotation::{RotationCursor, DEFAULT_ROTATION_STEP};
pub use style::FashionStyle;
