// ABOUTME: Create and edit plan sessions composing the shared store engine
// ABOUTME: Create adds the nutrition cache; edit adds metadata and a phase machine
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plan sessions.
//!
//! Two isolated lifecycles wrap the shared [`MealPlanStore`] engine: the
//! create session (duplicate-reject policy, owns the nutrition cache) and the
//! edit session (rekey-on-insert policy, owns plan identity metadata and the
//! original snapshot used for unsaved-change detection). Each session is an
//! explicit constructible container owned by a composition root; nothing here
//! is a process-wide singleton.

use crate::cache::NutritionCache;
use crate::config::NutritionConfig;
use crate::errors::AppResult;
use crate::intelligence::ProteinStrategy;
use crate::models::{RawUserProfile, RecommendedNutrition, UserProfileData};
use crate::planner::schedule_sync::{sync_meal_times, MealTimeSource, ScheduleSyncStatus};
use crate::planner::store::{DuplicatePolicy, MealPlanStore};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Session for building a new plan
#[derive(Debug, Clone, Default)]
pub struct CreatePlanSession {
    store: MealPlanStore,
    cache: NutritionCache,
}

impl CreatePlanSession {
    /// Create a fresh session with an empty plan and cache
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: MealPlanStore::new(DuplicatePolicy::Reject),
            cache: NutritionCache::new(),
        }
    }

    /// The session's plan store
    #[must_use]
    pub const fn store(&self) -> &MealPlanStore {
        &self.store
    }

    /// Mutable access to the session's plan store
    pub fn store_mut(&mut self) -> &mut MealPlanStore {
        &mut self.store
    }

    /// The session's nutrition cache
    #[must_use]
    pub const fn cache(&self) -> &NutritionCache {
        &self.cache
    }

    /// Resolve the nutrition target for the current raw profile.
    ///
    /// An incomplete profile yields the documented fallback nutrition; a
    /// complete one is routed through the cache.
    pub fn recommended_nutrition(
        &mut self,
        raw: &RawUserProfile,
        strategy: ProteinStrategy,
        config: &NutritionConfig,
    ) -> RecommendedNutrition {
        UserProfileData::from_raw(raw).map_or_else(
            || {
                tracing::debug!("profile incomplete, serving fallback nutrition");
                RecommendedNutrition::fallback(&config.fallback)
            },
            |profile| self.cache.get_or_compute(&profile, strategy, config),
        )
    }

    /// Clear the nutrition cache (logout, profile change)
    pub fn invalidate_nutrition_cache(&mut self) {
        self.cache.invalidate();
    }

    /// Best-effort merge of the server meal-time schedule into the defaults
    pub async fn sync_meal_times(&mut self, source: &dyn MealTimeSource) -> ScheduleSyncStatus {
        sync_meal_times(&mut self.store, source).await
    }
}

/// Plan identity metadata carried by the edit session
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanMetadata {
    /// Backend plan id
    pub plan_id: Option<String>,
    /// Plan display name
    pub plan_name: Option<String>,
    /// Plan description
    pub plan_description: Option<String>,
    /// Plan cover image reference
    pub plan_image: Option<String>,
    /// Whether saving should also mark this plan as the user's current plan
    pub set_as_current_plan: bool,
}

/// Partial metadata update, shallow-merged into [`PlanMetadata`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanMetadataPatch {
    /// New plan id, when present
    pub plan_id: Option<String>,
    /// New plan name, when present
    pub plan_name: Option<String>,
    /// New description, when present
    pub plan_description: Option<String>,
    /// New cover image, when present
    pub plan_image: Option<String>,
    /// New current-plan flag, when present
    pub set_as_current_plan: Option<bool>,
}

impl PlanMetadata {
    /// Shallow-merge a patch: absent patch fields leave the current value
    pub fn apply(&mut self, patch: PlanMetadataPatch) {
        if let Some(plan_id) = patch.plan_id {
            self.plan_id = Some(plan_id);
        }
        if let Some(plan_name) = patch.plan_name {
            self.plan_name = Some(plan_name);
        }
        if let Some(plan_description) = patch.plan_description {
            self.plan_description = Some(plan_description);
        }
        if let Some(plan_image) = patch.plan_image {
            self.plan_image = Some(plan_image);
        }
        if let Some(flag) = patch.set_as_current_plan {
            self.set_as_current_plan = flag;
        }
    }
}

/// Lifecycle phase of an edit session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditSessionPhase {
    /// No plan loaded yet
    Uninitialized,
    /// `initialize_edit_mode` called, awaiting the plan payload
    Loading,
    /// Plan loaded; mutations permitted
    Populated,
    /// Save in flight
    Saving,
}

/// Session for modifying an existing persisted plan
#[derive(Debug, Clone)]
pub struct EditPlanSession {
    store: MealPlanStore,
    metadata: PlanMetadata,
    original_metadata: PlanMetadata,
    phase: EditSessionPhase,
}

impl Default for EditPlanSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditPlanSession {
    /// Create an uninitialized edit session
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: MealPlanStore::new(DuplicatePolicy::Rekey),
            metadata: PlanMetadata::default(),
            original_metadata: PlanMetadata::default(),
            phase: EditSessionPhase::Uninitialized,
        }
    }

    /// The session's plan store
    #[must_use]
    pub const fn store(&self) -> &MealPlanStore {
        &self.store
    }

    /// Mutable access to the session's plan store
    pub fn store_mut(&mut self) -> &mut MealPlanStore {
        &mut self.store
    }

    /// Current lifecycle phase
    #[must_use]
    pub const fn phase(&self) -> EditSessionPhase {
        self.phase
    }

    /// Current plan metadata
    #[must_use]
    pub const fn metadata(&self) -> &PlanMetadata {
        &self.metadata
    }

    /// Enter the loading phase ahead of a plan fetch
    pub fn initialize_edit_mode(&mut self) {
        self.phase = EditSessionPhase::Loading;
    }

    /// Load the fetched plan payload, entering the populated phase.
    ///
    /// On success the current metadata becomes the original snapshot. On
    /// failure the session (store, metadata, phase) is unchanged.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` for unparseable or mis-shaped payloads.
    pub fn load_plan(&mut self, value: &Value) -> AppResult<()> {
        self.store.load_plan_payload(value)?;
        self.original_metadata = self.metadata.clone();
        self.phase = EditSessionPhase::Populated;
        Ok(())
    }

    /// Shallow-merge metadata fields into the session
    pub fn set_plan_metadata(&mut self, patch: PlanMetadataPatch) {
        self.metadata.apply(patch);
    }

    /// Whether current metadata differs structurally from the loaded snapshot.
    ///
    /// There is no dirty flag; this comparison is computed on demand to gate
    /// the save action.
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.metadata != self.original_metadata
    }

    /// Enter the saving phase
    pub fn begin_save(&mut self) {
        self.phase = EditSessionPhase::Saving;
    }

    /// Leave the saving phase.
    ///
    /// A successful save makes the current metadata the new snapshot; a
    /// failed one leaves the snapshot untouched.
    pub fn finish_save(&mut self, success: bool) {
        if success {
            self.original_metadata = self.metadata.clone();
        }
        self.phase = EditSessionPhase::Populated;
    }

    /// Fully end the editing lifecycle: plan, schedules, metadata, snapshot,
    /// and phase all return to their initial state.
    pub fn clear_edit_session(&mut self) {
        self.store.reset();
        self.metadata = PlanMetadata::default();
        self.original_metadata = PlanMetadata::default();
        self.phase = EditSessionPhase::Uninitialized;
    }
}
