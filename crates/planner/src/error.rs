use lookbook_core::CoreError;

/// Error type for planner operations.
///
/// Wraps the domain taxonomy from `lookbook-core` and adds the one failure
/// class the core cannot produce: the rotation store itself failing. A
/// storage failure is surfaced as-is; the planner never substitutes a
/// zero cursor for a failed read, which would silently mask lost rotation
/// state.
#[derive(Debug, thiserror::Error)]
pub enum PlannerError {
    /// A domain-level error from `lookbook-core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The rotation persistence layer failed.
    #[error("Rotation storage error: {0}")]
    RotationStorage(#[from] sqlx::Error),
}
