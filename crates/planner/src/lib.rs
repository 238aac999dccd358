//! Lookbook feed planner.
//!
//! This crate is the composition layer between the pure prompt core
//! (`lookbook-core`) and rotation-cursor persistence (`lookbook-db`):
//!
//! - [`RotationStore`] — the async seam over cursor storage, with a
//!   Postgres implementation ([`PgRotationStore`]) and an in-memory one
//!   ([`MemoryRotationStore`]) for tests and storeless callers.
//! - [`FeedPlanner`] — the public entry point: inject a template at the
//!   current rotation position, read rotation state, and explicitly
//!   advance it once a feed is accepted.
//!
//! Reading state for injection never advances the cursor; abandonment
//! between the two steps changes nothing.

pub mod error;
pub mod planner;
pub mod store;

pub use error::PlannerError;
pub use planner::FeedPlanner;
pub use store::{MemoryRotationStore, PgRotationStore, RotationStore};

// The synchronous core surface, re-exported so most callers depend on this
// crate alone.
pub use lookbook_core::frames::{extract_frame, frame_count};
pub use lookbook_core::injector::{inject, InjectionContext};
pub use lookbook_core::rotation::{RotationCursor, DEFAULT_ROTATION_STEP};
pub use lookbook_core::style::FashionStyle;
pub use lookbook_core::templates::{photoshoot_template, FRAMES_PER_FEED};
pub use lookbook_core::CoreError;
