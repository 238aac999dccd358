//! Integration tests for the rotation-state repository.
//!
//! Exercises the repository against a real database:
//! - Lazy creation at all-zero indices
//! - Idempotent reads
//! - Atomic advancement, including creation-on-advance
//! - Lost-update safety under concurrent advances
//! - Triple independence and uniqueness

use sqlx::PgPool;

use lookbook_core::rotation::DEFAULT_ROTATION_STEP;
use lookbook_db::repositories::RotationStateRepo;

const USER: &str = "user-itest";
const VIBE: &str = "luxury_dark_moody";
const STYLE: &str = "business";

// ---------------------------------------------------------------------------
// Creation and reads
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn fresh_triple_starts_at_zero(pool: PgPool) {
    let state = RotationStateRepo::get_or_create(&pool, USER, VIBE, STYLE)
        .await
        .unwrap();

    assert_eq!(state.outfit_index, 0);
    assert_eq!(state.location_index, 0);
    assert_eq!(state.accessory_index, 0);
    assert_eq!(state.total_generations, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_or_create_is_idempotent(pool: PgPool) {
    let first = RotationStateRepo::get_or_create(&pool, USER, VIBE, STYLE)
        .await
        .unwrap();

    for _ in 0..3 {
        let again = RotationStateRepo::get_or_create(&pool, USER, VIBE, STYLE)
            .await
            .unwrap();
        assert_eq!(again.id, first.id);
        assert_eq!(again.outfit_index, 0);
        assert_eq!(again.location_index, 0);
        assert_eq!(again.accessory_index, 0);
        assert_eq!(again.total_generations, 0);
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn find_returns_none_before_first_access(pool: PgPool) {
    let state = RotationStateRepo::find(&pool, USER, VIBE, STYLE)
        .await
        .unwrap();
    assert!(state.is_none());
}

// ---------------------------------------------------------------------------
// Advancement
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn advance_from_fresh_triple(pool: PgPool) {
    RotationStateRepo::get_or_create(&pool, USER, VIBE, STYLE)
        .await
        .unwrap();

    let state = RotationStateRepo::advance(&pool, USER, VIBE, STYLE, DEFAULT_ROTATION_STEP)
        .await
        .unwrap();

    assert_eq!(state.outfit_index, 4);
    assert_eq!(state.location_index, 4);
    assert_eq!(state.accessory_index, 4);
    assert_eq!(state.total_generations, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn advance_on_missing_row_creates_already_advanced(pool: PgPool) {
    // No prior get_or_create: the upsert arm must create the row as if it
    // had been created at zero and advanced once.
    let state = RotationStateRepo::advance(&pool, USER, VIBE, STYLE, 4)
        .await
        .unwrap();

    assert_eq!(state.outfit_index, 4);
    assert_eq!(state.location_index, 4);
    assert_eq!(state.accessory_index, 4);
    assert_eq!(state.total_generations, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn sequential_advances_are_exactly_linear(pool: PgPool) {
    let step = 3;
    for k in 1..=5 {
        let state = RotationStateRepo::advance(&pool, USER, VIBE, STYLE, step)
            .await
            .unwrap();
        assert_eq!(state.outfit_index, k * step);
        assert_eq!(state.location_index, k * step);
        assert_eq!(state.accessory_index, k * step);
        assert_eq!(state.total_generations, k);
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn advance_bumps_last_used_at(pool: PgPool) {
    let before = RotationStateRepo::get_or_create(&pool, USER, VIBE, STYLE)
        .await
        .unwrap();
    let after = RotationStateRepo::advance(&pool, USER, VIBE, STYLE, 4)
        .await
        .unwrap();
    assert!(after.last_used_at >= before.last_used_at);
    assert!(after.updated_at >= before.updated_at);
}

// ---------------------------------------------------------------------------
// Concurrency
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn concurrent_advances_lose_no_updates(pool: PgPool) {
    let tasks = 8;
    let step = 4;

    let mut handles = Vec::new();
    for _ in 0..tasks {
        let pool = pool.clone();
        handles.push(tokio::spawn(async move {
            RotationStateRepo::advance(&pool, USER, VIBE, STYLE, step)
                .await
                .unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let state = RotationStateRepo::find(&pool, USER, VIBE, STYLE)
        .await
        .unwrap()
        .expect("row must exist after advances");
    assert_eq!(state.outfit_index, tasks * step);
    assert_eq!(state.location_index, tasks * step);
    assert_eq!(state.accessory_index, tasks * step);
    assert_eq!(state.total_generations, tasks);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn concurrent_first_access_creates_exactly_one_row(pool: PgPool) {
    let mut handles = Vec::new();
    for _ in 0..8 {
        let pool = pool.clone();
        handles.push(tokio::spawn(async move {
            RotationStateRepo::get_or_create(&pool, USER, VIBE, STYLE)
                .await
                .unwrap()
                .id
        }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap());
    }
    ids.dedup();
    assert_eq!(ids.len(), 1, "all callers must observe the same row");

    let count: (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM feed_rotation_states WHERE user_id = $1")
            .bind(USER)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(count.0, 1);
}

// ---------------------------------------------------------------------------
// Triple independence
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn triples_are_independent(pool: PgPool) {
    RotationStateRepo::advance(&pool, USER, VIBE, "business", 4)
        .await
        .unwrap();
    RotationStateRepo::advance(&pool, USER, VIBE, "business", 4)
        .await
        .unwrap();

    let casual = RotationStateRepo::get_or_create(&pool, USER, VIBE, "casual")
        .await
        .unwrap();
    assert_eq!(casual.outfit_index, 0);
    assert_eq!(casual.total_generations, 0);

    let other_vibe = RotationStateRepo::get_or_create(&pool, USER, "urban_editorial", "business")
        .await
        .unwrap();
    assert_eq!(other_vibe.outfit_index, 0);

    let business = RotationStateRepo::find(&pool, USER, VIBE, "business")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(business.outfit_index, 8);
    assert_eq!(business.total_generations, 2);
}
