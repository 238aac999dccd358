//! Repository for the `feed_rotation_states` table.
//!
//! Both writes are single-statement upserts keyed on the unique
//! (user_id, vibe, fashion_style) triple, so concurrent first access
//! creates exactly one row and concurrent advances never lose an
//! increment: every index update is expressed relative to the stored
//! column value, not a value previously read into the application.

use sqlx::PgPool;

use crate::models::rotation_state::RotationState;

const COLUMNS: &str = "\
    id, user_id, vibe, fashion_style, \
    outfit_index, location_index, accessory_index, \
    total_generations, last_used_at, created_at, updated_at";

/// Provides data access for per-user feed rotation cursors.
pub struct RotationStateRepo;

impl RotationStateRepo {
    /// Find the rotation state for a triple, if it exists.
    pub async fn find(
        pool: &PgPool,
        user_id: &str,
        vibe: &str,
        fashion_style: &str,
    ) -> Result<Option<RotationState>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM feed_rotation_states \
             WHERE user_id = $1 AND vibe = $2 AND fashion_style = $3"
        );
        sqlx::query_as::<_, RotationState>(&query)
            .bind(user_id)
            .bind(vibe)
            .bind(fashion_style)
            .fetch_optional(pool)
            .await
    }

    /// Return the existing rotation state for a triple, creating it at
    /// all-zero indices if absent.
    ///
    /// The `DO UPDATE` arm writes back an unchanged column so `RETURNING`
    /// yields the existing row in the same round trip; indices and
    /// counters are never touched by a read.
    pub async fn get_or_create(
        pool: &PgPool,
        user_id: &str,
        vibe: &str,
        fashion_style: &str,
    ) -> Result<RotationState, sqlx::Error> {
        let query = format!(
            "INSERT INTO feed_rotation_states (user_id, vibe, fashion_style) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (user_id, vibe, fashion_style) DO UPDATE SET \
                 user_id = EXCLUDED.user_id \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RotationState>(&query)
            .bind(user_id)
            .bind(vibe)
            .bind(fashion_style)
            .fetch_one(pool)
            .await
    }

    /// Atomically advance all three rotation indices by `step`, increment
    /// the generation counter, and bump `last_used_at`.
    ///
    /// A missing row is created already advanced (indices at `step`,
    /// one generation) in the same statement, so advancing never fails
    /// due to absence and a partial multi-column update cannot occur.
    pub async fn advance(
        pool: &PgPool,
        user_id: &str,
        vibe: &str,
        fashion_style: &str,
        step: i32,
    ) -> Result<RotationState, sqlx::Error> {
        let query = format!(
            "INSERT INTO feed_rotation_states \
                 (user_id, vibe, fashion_style, \
                  outfit_index, location_index, accessory_index, \
                  total_generations, last_used_at) \
             VALUES ($1, $2, $3, $4, $4, $4, 1, NOW()) \
             ON CONFLICT (user_id, vibe, fashion_style) DO UPDATE SET \
                 outfit_index = feed_rotation_states.outfit_index + $4, \
                 location_index = feed_rotation_states.location_index + $4, \
                 accessory_index = feed_rotation_states.accessory_index + $4, \
                 total_generations = feed_rotation_states.total_generations + 1, \
                 last_used_at = NOW(), \
                 updated_at = NOW() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RotationState>(&query)
            .bind(user_id)
            .bind(vibe)
            .bind(fashion_style)
            .bind(step)
            .fetch_one(pool)
            .await
    }
}
