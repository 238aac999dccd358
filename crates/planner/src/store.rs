//! Rotation cursor storage seam.
//!
//! [`RotationStore`] abstracts where cursors live so the planner logic is
//! testable without Postgres. Both operations are atomic with respect to
//! concurrent callers for the same triple: the Postgres implementation
//! relies on the unique-triple upsert and column-relative increments in
//! `lookbook-db`; the in-memory implementation serializes on a mutex.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use lookbook_core::rotation::RotationCursor;
use lookbook_core::style::FashionStyle;
use lookbook_db::repositories::RotationStateRepo;
use lookbook_db::DbPool;

use crate::error::PlannerError;

/// Async storage for rotation cursors, keyed by (user, vibe, style).
#[async_trait]
pub trait RotationStore: Send + Sync {
    /// Return the cursor for a triple, creating it at all-zero indices if
    /// absent. Reads never move the cursor.
    async fn get_or_create(
        &self,
        user_id: &str,
        vibe: &str,
        style: FashionStyle,
    ) -> Result<RotationCursor, PlannerError>;

    /// Atomically advance all three indices by `step` and increment the
    /// generation counter, returning the post-increment cursor. Creates
    /// the triple already advanced if it does not exist.
    async fn advance(
        &self,
        user_id: &str,
        vibe: &str,
        style: FashionStyle,
        step: i32,
    ) -> Result<RotationCursor, PlannerError>;
}

/* --------------------------------------------------------------------------
Postgres-backed store
-------------------------------------------------------------------------- */

/// Rotation store backed by the `feed_rotation_states` table.
pub struct PgRotationStore {
    pool: DbPool,
}

impl PgRotationStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RotationStore for PgRotationStore {
    async fn get_or_create(
        &self,
        user_id: &str,
        vibe: &str,
        style: FashionStyle,
    ) -> Result<RotationCursor, PlannerError> {
        let row =
            RotationStateRepo::get_or_create(&self.pool, user_id, vibe, style.as_str()).await?;
        Ok(row.into())
    }

    async fn advance(
        &self,
        user_id: &str,
        vibe: &str,
        style: FashionStyle,
        step: i32,
    ) -> Result<RotationCursor, PlannerError> {
        let row =
            RotationStateRepo::advance(&self.pool, user_id, vibe, style.as_str(), step).await?;
        Ok(row.into())
    }
}

/* --------------------------------------------------------------------------
In-memory store
-------------------------------------------------------------------------- */

type TripleKey = (String, String, &'static str);

/// Process-local rotation store for tests and storeless callers.
///
/// State lives only as long as the value; all triples share one mutex,
/// which is more serialization than the contract requires but is
/// irrelevant at in-memory speeds.
#[derive(Default)]
pub struct MemoryRotationStore {
    cursors: Mutex<HashMap<TripleKey, RotationCursor>>,
}

impl MemoryRotationStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(user_id: &str, vibe: &str, style: FashionStyle) -> TripleKey {
        (user_id.to_string(), vibe.to_string(), style.as_str())
    }
}

#[async_trait]
impl RotationStore for MemoryRotationStore {
    async fn get_or_create(
        &self,
        user_id: &str,
        vibe: &str,
        style: FashionStyle,
    ) -> Result<RotationCursor, PlannerError> {
        let mut cursors = self.cursors.lock().expect("rotation store poisoned");
        let cursor = cursors
            .entry(Self::key(user_id, vibe, style))
            .or_insert_with(|| RotationCursor::fresh(chrono::Utc::now()));
        Ok(cursor.clone())
    }

    async fn advance(
        &self,
        user_id: &str,
        vibe: &str,
        style: FashionStyle,
        step: i32,
    ) -> Result<RotationCursor, PlannerError> {
        let mut cursors = self.cursors.lock().expect("rotation store poisoned");
        let cursor = cursors
            .entry(Self::key(user_id, vibe, style))
            .or_insert_with(|| RotationCursor::fresh(chrono::Utc::now()));
        cursor.outfit_index += step;
        cursor.location_index += step;
        cursor.accessory_index += step;
        cursor.total_generations += 1;
        cursor.last_used_at = chrono::Utc::now();
        Ok(cursor.clone())
    }
}
