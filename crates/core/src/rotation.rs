//! Rotation cursor value type and advancement constant.
//!
//! The cursor is the persisted per-(user, vibe, style) state that drives
//! variant selection. Indices are raw monotonic counters and are never
//! stored pre-wrapped. Wrapping to a bounded variant choice happens only at
//! resolution time via `index mod catalog_len`, which keeps "how many full
//! cycles has this user seen" recoverable and keeps resolution correct if
//! the catalog grows.

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// Default advancement step applied to every rotating index.
///
/// Each feed renders four frames, so stepping by four moves the next feed
/// to a materially different point in the catalog cycle instead of the
/// adjacent (likely similar) variant. Callers may override per advance.
pub const DEFAULT_ROTATION_STEP: i32 = 4;

/// Current rotation position for one (user, vibe, canonical style) triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationCursor {
    /// Raw outfit index; always >= 0, never wrapped in storage.
    pub outfit_index: i32,
    /// Raw location index; always >= 0, never wrapped in storage.
    pub location_index: i32,
    /// Raw accessory index; always >= 0, never wrapped in storage.
    pub accessory_index: i32,
    /// Number of completed advances for this triple.
    pub total_generations: i32,
    /// Last time this cursor was advanced (creation time until then).
    pub last_used_at: Timestamp,
}

impl RotationCursor {
    /// A fresh cursor at all-zero indices, as created on first access.
    pub fn fresh(now: Timestamp) -> Self {
        Self {
            outfit_index: 0,
            location_index: 0,
            accessory_index: 0,
            total_generations: 0,
            last_used_at: now,
        }
    }
}
