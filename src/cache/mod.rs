// ABOUTME: Single-slot memoization of the nutrition target calculation
// ABOUTME: Keyed by a profile hash, expired by a 24h TTL, invalidated on demand
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Nutrition target cache.
//!
//! The calculation is cheap, but callers invoke it on every render. This
//! single-slot cache avoids the redundant work while guaranteeing the result
//! reflects the current profile (hash check) and never goes permanently stale
//! (TTL check). An entry is valid only when the stored hash matches the
//! current profile's hash AND its age is below the configured TTL; otherwise
//! it is treated as absent and recomputed.

use crate::config::NutritionConfig;
use crate::intelligence::{calculate_recommended_nutrition, ProteinStrategy};
use crate::models::{RecommendedNutrition, UserProfileData};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// The cached slot: hash of the inputs, the result, and when it was computed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
struct CacheEntry {
    profile_hash: String,
    nutrition: RecommendedNutrition,
    last_calculated: DateTime<Utc>,
}

/// Single-entry memoization layer in front of the target calculator
#[derive(Debug, Clone, Default)]
pub struct NutritionCache {
    entry: Option<CacheEntry>,
    computations: u64,
}

impl NutritionCache {
    /// Create an empty cache
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached nutrition for `profile`, recomputing when needed.
    pub fn get_or_compute(
        &mut self,
        profile: &UserProfileData,
        strategy: ProteinStrategy,
        config: &NutritionConfig,
    ) -> RecommendedNutrition {
        self.get_or_compute_at(Utc::now(), profile, strategy, config)
    }

    /// Clock-injected variant of [`Self::get_or_compute`], used by TTL tests.
    pub fn get_or_compute_at(
        &mut self,
        now: DateTime<Utc>,
        profile: &UserProfileData,
        strategy: ProteinStrategy,
        config: &NutritionConfig,
    ) -> RecommendedNutrition {
        let hash = profile.cache_hash();
        let ttl = Duration::hours(config.cache.ttl_hours);

        if let Some(entry) = &self.entry {
            if entry.profile_hash == hash && now - entry.last_calculated < ttl {
                tracing::debug!(hash = %hash, "nutrition cache hit");
                return entry.nutrition.clone();
            }
        }

        tracing::debug!(hash = %hash, "nutrition cache miss, recomputing");
        let nutrition = calculate_recommended_nutrition(profile, strategy, config);
        self.computations += 1;
        self.entry = Some(CacheEntry {
            profile_hash: hash,
            nutrition: nutrition.clone(),
            last_calculated: now,
        });
        nutrition
    }

    /// Clear the cache slot unconditionally (logout, profile change)
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    /// Number of calculator invocations performed so far
    #[must_use]
    pub const fn computations(&self) -> u64 {
        self.computations
    }

    /// Whether the slot currently holds an entry (valid or not)
    #[must_use]
    pub const fn has_entry(&self) -> bool {
        self.entry.is_some()
    }
}
