// ABOUTME: Meal planner module root: store engine, sessions, payload, sync
// ABOUTME: Re-exports the planner API surface
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Meal plan state management.

/// External plan payload schema and load/export
pub mod payload;
/// Meal-time schedule sync
pub mod schedule_sync;
/// Create and edit sessions
pub mod session;
/// The shared store engine
pub mod store;

pub use payload::{parse_plan_payload, DayPayload, FoodItemPayload, MealPayload, PlanPayload};
pub use schedule_sync::{apply_meal_times, sync_meal_times, MealTimeSource, ScheduleSyncStatus};
pub use session::{
    CreatePlanSession, EditPlanSession, EditSessionPhase, PlanMetadata, PlanMetadataPatch,
};
pub use store::{CustomMealsPerDay, DuplicatePolicy, MealPlanStore};
