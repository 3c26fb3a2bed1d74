// ABOUTME: Configuration module root re-exporting nutrition settings
// ABOUTME: All tunable constants live in plain serde structs with defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration management for the nutriplan core.

/// Nutrition target calculation configuration
pub mod nutrition;

pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, CalorieAdjustmentConfig, EnergySplitConfig,
    FallbackNutritionConfig, NutritionCacheConfig, NutritionConfig, ProteinByActivity,
    ProteinTargetConfig,
};
