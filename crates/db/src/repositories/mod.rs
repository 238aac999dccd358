//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod rotation_state_repo;

pub use rotation_state_repo::RotationStateRepo;
