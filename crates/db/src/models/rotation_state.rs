//! Rotation-state model for the `feed_rotation_states` table.

use lookbook_core::rotation::RotationCursor;
use lookbook_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `feed_rotation_states` table.
///
/// One row exists per (user_id, vibe, fashion_style) triple; the triple is
/// the identity of the entity and carries a unique constraint in the
/// schema. Indices are raw monotonic counters; they are never stored
/// pre-wrapped (wrapping happens at injection time, modulo catalog length).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RotationState {
    pub id: DbId,
    /// Opaque external user identifier; ownership and deletion cascade
    /// belong to the user system, not this table.
    pub user_id: String,
    pub vibe: String,
    pub fashion_style: String,
    pub outfit_index: i32,
    pub location_index: i32,
    pub accessory_index: i32,
    pub total_generations: i32,
    pub last_used_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<RotationState> for RotationCursor {
    fn from(row: RotationState) -> Self {
        RotationCursor {
            outfit_index: row.outfit_index,
            location_index: row.location_index,
            accessory_index: row.accessory_index,
            total_generations: row.total_generations,
            last_used_at: row.last_used_at,
        }
    }
}
