//! The feed planner facade.
//!
//! Composes the fashion-style mapper, the rotation store, and the template
//! injector into the operations calling code uses. Reading rotation state
//! (for injection or display) and consuming it are deliberately separate
//! calls: [`FeedPlanner::inject_with_rotation`] never advances the cursor,
//! and [`FeedPlanner::advance_rotation`] is the explicit commit once a
//! feed has been accepted.

use lookbook_core::injector::{inject, InjectionContext};
use lookbook_core::rotation::{RotationCursor, DEFAULT_ROTATION_STEP};
use lookbook_core::style::FashionStyle;
use lookbook_core::CoreError;

use crate::error::PlannerError;
use crate::store::RotationStore;

/// Entry point for rotation-aware prompt generation.
pub struct FeedPlanner<S> {
    store: S,
}

impl<S: RotationStore> FeedPlanner<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Inject a template at the user's current rotation position.
    ///
    /// Resolves the raw style, loads (or lazily creates) the cursor for
    /// the triple, and injects without advancing. Repeated calls without
    /// an intervening [`advance_rotation`](Self::advance_rotation) return
    /// identical output.
    pub async fn inject_with_rotation(
        &self,
        template: &str,
        vibe: &str,
        raw_style: &str,
        user_id: &str,
    ) -> Result<String, PlannerError> {
        let style = FashionStyle::resolve(raw_style);
        let cursor = self.store.get_or_create(user_id, vibe, style).await?;
        tracing::debug!(
            user_id,
            vibe,
            style = %style,
            outfit_index = cursor.outfit_index,
            total_generations = cursor.total_generations,
            "injecting template at rotation cursor"
        );
        let ctx = InjectionContext::with_cursor(vibe, style, &cursor);
        Ok(inject(template, &ctx)?)
    }

    /// Current rotation cursor for a triple, created at zeros on first read.
    pub async fn rotation_state(
        &self,
        user_id: &str,
        vibe: &str,
        raw_style: &str,
    ) -> Result<RotationCursor, PlannerError> {
        let style = FashionStyle::resolve(raw_style);
        self.store.get_or_create(user_id, vibe, style).await
    }

    /// Commit one consumed rotation: advance all indices by `step`
    /// (default [`DEFAULT_ROTATION_STEP`]) and count the generation.
    pub async fn advance_rotation(
        &self,
        user_id: &str,
        vibe: &str,
        raw_style: &str,
        step: Option<i32>,
    ) -> Result<RotationCursor, PlannerError> {
        let step = step.unwrap_or(DEFAULT_ROTATION_STEP);
        if step < 1 {
            return Err(CoreError::Validation(format!(
                "Rotation step must be >= 1 (got {step})"
            ))
            .into());
        }

        let style = FashionStyle::resolve(raw_style);
        let cursor = self.store.advance(user_id, vibe, style, step).await?;
        tracing::debug!(
            user_id,
            vibe,
            style = %style,
            step,
            outfit_index = cursor.outfit_index,
            total_generations = cursor.total_generations,
            "advanced rotation cursor"
        );
        Ok(cursor)
    }
}
