// ABOUTME: Nutrition configuration for target calculation and caching
// ABOUTME: Configures BMR coefficients, activity factors, protein tables, and energy split
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Nutrition Target Configuration
//!
//! Provides every tunable constant consumed by the target calculator and the
//! nutrition cache: Mifflin-St Jeor coefficients, TDEE activity factors,
//! goal-specific calorie adjustments, protein g/kg tables, and the
//! remaining-energy split ratios.
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Protein: Phillips & Van Loon (2011) DOI: 10.1080/02640414.2011.619204

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Root nutrition configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) calculation settings
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
    /// Goal-specific daily calorie adjustments
    pub calorie_adjustment: CalorieAdjustmentConfig,
    /// Protein g/kg selection tables
    pub protein: ProteinTargetConfig,
    /// Remaining-energy carb/fat split ratios
    pub energy_split: EnergySplitConfig,
    /// Nutrition cache TTL settings
    pub cache: NutritionCacheConfig,
    /// Fallback nutrition served when the profile is incomplete
    pub fallback: FallbackNutritionConfig,
}

impl NutritionConfig {
    /// Validate every sub-configuration.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure found in any section.
    pub fn validate(&self) -> AppResult<()> {
        self.calorie_adjustment.validate()?;
        self.protein.validate()?;
        self.energy_split.validate()?;
        self.cache.validate()
    }
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for
/// resting energy expenditure. American Journal of Clinical Nutrition,
/// 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161), also applied to `other`
    pub msj_female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Low activity (little/no exercise): 1.2
    pub low: f64,
    /// Moderate activity: 1.55
    pub moderate: f64,
    /// High activity: 1.725
    pub high: f64,
    /// Very high activity (hard training): 1.9
    pub very_high: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            low: 1.2,
            moderate: 1.55,
            high: 1.725,
            very_high: 1.9,
        }
    }
}

/// Goal-specific daily calorie adjustments
///
/// Fixed per-day constants: deliberately independent of plan duration or the
/// magnitude of the weight difference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalorieAdjustmentConfig {
    /// Daily surplus for the `increase` goal (kcal): 200
    pub surplus_kcal: f64,
    /// Daily deficit for the `decrease` goal (kcal): 300
    pub deficit_kcal: f64,
    /// Safety floor for the target after a deficit (kcal): 1200
    pub min_target_kcal: f64,
}

impl Default for CalorieAdjustmentConfig {
    fn default() -> Self {
        Self {
            surplus_kcal: 200.0,
            deficit_kcal: 300.0,
            min_target_kcal: 1200.0,
        }
    }
}

impl CalorieAdjustmentConfig {
    /// Validate adjustment constants are non-negative.
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` if any constant is negative.
    pub fn validate(&self) -> AppResult<()> {
        let values = [
            ("surplus_kcal", self.surplus_kcal),
            ("deficit_kcal", self.deficit_kcal),
            ("min_target_kcal", self.min_target_kcal),
        ];
        for (name, value) in values {
            if value < 0.0 {
                return Err(AppError::out_of_range(format!(
                    "{name} must be non-negative, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Protein g/kg factors keyed by activity level, for one goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProteinByActivity {
    /// g/kg at low activity
    pub low: f64,
    /// g/kg at moderate activity
    pub moderate: f64,
    /// g/kg at high activity
    pub high: f64,
    /// g/kg at very high activity
    pub very_high: f64,
}

/// Protein target selection tables
///
/// Two strategies exist: the dynamic (goal x activity) table is the default;
/// the simple (goal-only) table is retained for callers that opt in. Either
/// way the selected g/kg factor is clamped to `[clamp_min, clamp_max]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProteinTargetConfig {
    /// Dynamic table row for the `increase` goal
    pub dynamic_increase: ProteinByActivity,
    /// Dynamic table row for the `decrease` goal
    pub dynamic_decrease: ProteinByActivity,
    /// Dynamic table row for the `healthy` goal
    pub dynamic_healthy: ProteinByActivity,
    /// Simple table: `increase` goal g/kg
    pub simple_increase: f64,
    /// Simple table: `decrease` goal g/kg
    pub simple_decrease: f64,
    /// Simple table: `healthy` goal g/kg
    pub simple_healthy: f64,
    /// Lower clamp for the selected g/kg factor: 1.0
    pub clamp_min: f64,
    /// Upper clamp for the selected g/kg factor: 2.2
    pub clamp_max: f64,
}

impl Default for ProteinTargetConfig {
    fn default() -> Self {
        Self {
            dynamic_increase: ProteinByActivity {
                low: 1.4,
                moderate: 1.6,
                high: 1.8,
                very_high: 2.0,
            },
            dynamic_decrease: ProteinByActivity {
                low: 1.2,
                moderate: 1.4,
                high: 1.6,
                very_high: 1.8,
            },
            dynamic_healthy: ProteinByActivity {
                low: 1.0,
                moderate: 1.2,
                high: 1.4,
                very_high: 1.6,
            },
            simple_increase: 1.8,
            simple_decrease: 1.6,
            simple_healthy: 1.2,
            clamp_min: 1.0,
            clamp_max: 2.2,
        }
    }
}

impl ProteinTargetConfig {
    /// Validate the clamp window is well-formed and factors are positive.
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` if `clamp_min > clamp_max` or any table
    /// entry is non-positive.
    pub fn validate(&self) -> AppResult<()> {
        if self.clamp_min > self.clamp_max {
            return Err(AppError::out_of_range(format!(
                "protein clamp_min {} exceeds clamp_max {}",
                self.clamp_min, self.clamp_max
            )));
        }
        let rows = [
            self.dynamic_increase,
            self.dynamic_decrease,
            self.dynamic_healthy,
        ];
        for row in rows {
            for factor in [row.low, row.moderate, row.high, row.very_high] {
                if factor <= 0.0 {
                    return Err(AppError::out_of_range(format!(
                        "protein g/kg factor must be positive, got {factor}"
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Remaining-energy split configuration
///
/// After protein calories are reserved, the remainder is split into carbs and
/// fat using a goal-specific carb ratio (fat takes the rest).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnergySplitConfig {
    /// Carb share of remaining energy for `increase`: 0.55
    pub increase_carb_ratio: f64,
    /// Carb share of remaining energy for `decrease`: 0.45
    pub decrease_carb_ratio: f64,
    /// Carb share of remaining energy for `healthy`: 0.55
    pub healthy_carb_ratio: f64,
}

impl Default for EnergySplitConfig {
    fn default() -> Self {
        Self {
            increase_carb_ratio: 0.55,
            decrease_carb_ratio: 0.45,
            healthy_carb_ratio: 0.55,
        }
    }
}

impl EnergySplitConfig {
    /// Validate each carb ratio lies within `0.0..=1.0`.
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` for a ratio outside the unit interval.
    pub fn validate(&self) -> AppResult<()> {
        let ratios = [
            ("increase_carb_ratio", self.increase_carb_ratio),
            ("decrease_carb_ratio", self.decrease_carb_ratio),
            ("healthy_carb_ratio", self.healthy_carb_ratio),
        ];
        for (name, ratio) in ratios {
            if !(0.0..=1.0).contains(&ratio) {
                return Err(AppError::out_of_range(format!(
                    "{name} must be between 0.0 and 1.0, got {ratio}"
                )));
            }
        }
        Ok(())
    }
}

/// Nutrition cache settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionCacheConfig {
    /// Cache TTL (hours) - 24 hours recommended
    pub ttl_hours: i64,
}

impl Default for NutritionCacheConfig {
    fn default() -> Self {
        Self { ttl_hours: 24 }
    }
}

impl NutritionCacheConfig {
    /// Validate the TTL is positive.
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` for a non-positive TTL.
    pub fn validate(&self) -> AppResult<()> {
        if self.ttl_hours <= 0 {
            return Err(AppError::out_of_range(format!(
                "ttl_hours must be positive, got {}",
                self.ttl_hours
            )));
        }
        Ok(())
    }
}

/// Fallback nutrition served when the user profile is incomplete
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallbackNutritionConfig {
    /// Fallback calorie target (kcal)
    pub cal: f64,
    /// Fallback carbohydrate target (grams)
    pub carb: f64,
    /// Fallback protein target (grams)
    pub protein: f64,
    /// Fallback fat target (grams)
    pub fat: f64,
    /// Fallback BMR diagnostic (kcal)
    pub bmr: f64,
    /// Fallback TDEE diagnostic (kcal)
    pub tdee: f64,
}

impl Default for FallbackNutritionConfig {
    fn default() -> Self {
        Self {
            cal: 2000.0,
            carb: 250.0,
            protein: 100.0,
            fat: 67.0,
            bmr: 1600.0,
            tdee: 2000.0,
        }
    }
}
