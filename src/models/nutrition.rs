// ABOUTME: Computed nutrition target result type
// ABOUTME: RecommendedNutrition with target macros plus BMR/TDEE diagnostics
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::config::FallbackNutritionConfig;
use serde::{Deserialize, Serialize};

/// Output of the nutrition target calculator.
///
/// Targets are daily values; `bmr` and `tdee` are the intermediate
/// diagnostics retained in the result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendedNutrition {
    /// Daily calorie target (kcal)
    pub cal: f64,
    /// Daily carbohydrate target (grams)
    pub carb: f64,
    /// Daily protein target (grams)
    pub protein: f64,
    /// Daily fat target (grams)
    pub fat: f64,
    /// Basal Metabolic Rate diagnostic (kcal)
    pub bmr: f64,
    /// Total Daily Energy Expenditure diagnostic (kcal)
    pub tdee: f64,
}

impl RecommendedNutrition {
    /// Documented default served when the user profile is incomplete
    #[must_use]
    pub const fn fallback(config: &FallbackNutritionConfig) -> Self {
        Self {
            cal: config.cal,
            carb: config.carb,
            protein: config.protein,
            fat: config.fat,
            bmr: config.bmr,
            tdee: config.tdee,
        }
    }
}
