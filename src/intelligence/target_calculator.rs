// ABOUTME: Nutrition target calculation algorithms using published formulas
// ABOUTME: BMR, TDEE, goal-adjusted calorie target, and macronutrient split
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Nutrition Target Calculator
//!
//! Pure, stateless computation of a personalized daily nutrition target from
//! a validated biometric profile. Deterministic and idempotent for identical
//! input; no function here performs I/O or touches shared state.
//!
//! Completeness and shape validation happen at the profile mapper
//! ([`crate::models::UserProfileData::from_raw`]); the calculator itself
//! computes for whatever finite numbers it is handed and is infallible.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting
//!   energy expenditure. *American Journal of Clinical Nutrition*, 51(2),
//!   241-247. <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - Phillips, S.M., & Van Loon, L.J. (2011). Dietary protein for athletes.
//!   *Journal of Sports Sciences*, 29(sup1), S29-S38.
//!   <https://doi.org/10.1080/02640414.2011.619204>

use crate::config::{
    ActivityFactorsConfig, BmrConfig, CalorieAdjustmentConfig, EnergySplitConfig, NutritionConfig,
    ProteinTargetConfig,
};
use crate::constants::{KCAL_PER_GRAM_CARB, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN};
use crate::models::{ActivityLevel, Gender, RecommendedNutrition, TargetGoal, UserProfileData};
use serde::{Deserialize, Serialize};

/// Protein g/kg selection strategy
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProteinStrategy {
    /// Goal x activity table (the default)
    #[default]
    Dynamic,
    /// Goal-only table
    Simple,
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_constant`
/// - Male: +5
/// - Female and other: -161
///
/// Result is rounded to the nearest integer.
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[must_use]
pub fn calculate_bmr(
    weight_kg: f64,
    height_cm: f64,
    age: f64,
    gender: Gender,
    config: &BmrConfig,
) -> f64 {
    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * height_cm;
    let age_component = config.msj_age_coef * age;

    let gender_constant = match gender {
        Gender::Male => config.msj_male_constant,
        Gender::Female | Gender::Other => config.msj_female_constant,
    };

    (weight_component + height_component + age_component + gender_constant).round()
}

/// Calculate Total Daily Energy Expenditure (TDEE)
///
/// Formula: TDEE = BMR x Activity Factor, rounded.
///
/// Activity factors: low 1.2, moderate 1.55, high 1.725, very high 1.9.
#[must_use]
pub fn calculate_tdee(
    bmr: f64,
    activity_level: ActivityLevel,
    config: &ActivityFactorsConfig,
) -> f64 {
    let activity_factor = match activity_level {
        ActivityLevel::Low => config.low,
        ActivityLevel::Moderate => config.moderate,
        ActivityLevel::High => config.high,
        ActivityLevel::VeryHigh => config.very_high,
    };

    (bmr * activity_factor).round()
}

/// Calculate the goal-adjusted daily calorie target
///
/// - `healthy`: TDEE unchanged
/// - `increase`: TDEE + fixed daily surplus
/// - `decrease`: TDEE - fixed daily deficit, floored at the safety minimum
///
/// The adjustments are fixed per-day constants, independent of plan duration.
#[must_use]
pub fn calculate_target_calories(
    tdee: f64,
    goal: TargetGoal,
    config: &CalorieAdjustmentConfig,
) -> f64 {
    match goal {
        TargetGoal::Healthy => tdee,
        TargetGoal::Increase => tdee + config.surplus_kcal,
        TargetGoal::Decrease => (tdee - config.deficit_kcal).max(config.min_target_kcal),
    }
}

/// Calculate the daily protein target in grams
///
/// Formula: Protein (g) = `target_weight_kg` x g/kg factor, rounded.
///
/// The factor comes from the strategy's table (goal x activity for
/// [`ProteinStrategy::Dynamic`], goal-only for [`ProteinStrategy::Simple`])
/// and is clamped to the configured window before multiplying.
///
/// # Reference
/// Phillips & Van Loon (2011) DOI: 10.1080/02640414.2011.619204
#[must_use]
pub fn calculate_protein_grams(
    target_weight_kg: f64,
    goal: TargetGoal,
    activity_level: ActivityLevel,
    strategy: ProteinStrategy,
    config: &ProteinTargetConfig,
) -> f64 {
    let g_per_kg = match strategy {
        ProteinStrategy::Dynamic => {
            let row = match goal {
                TargetGoal::Increase => config.dynamic_increase,
                TargetGoal::Decrease => config.dynamic_decrease,
                TargetGoal::Healthy => config.dynamic_healthy,
            };
            match activity_level {
                ActivityLevel::Low => row.low,
                ActivityLevel::Moderate => row.moderate,
                ActivityLevel::High => row.high,
                ActivityLevel::VeryHigh => row.very_high,
            }
        }
        ProteinStrategy::Simple => match goal {
            TargetGoal::Increase => config.simple_increase,
            TargetGoal::Decrease => config.simple_decrease,
            TargetGoal::Healthy => config.simple_healthy,
        },
    };

    let clamped = g_per_kg.clamp(config.clamp_min, config.clamp_max);
    (target_weight_kg * clamped).round()
}

/// Split the remaining energy after protein into carb and fat grams
///
/// `remaining = max(target_cal - protein_g x 4, 0)`; the goal's carb ratio
/// takes its share at 4 kcal/g and fat takes the rest at 9 kcal/g, both
/// rounded. The clamp at zero guarantees non-negative macros even when the
/// protein target alone exceeds the calorie target.
#[must_use]
pub fn split_remaining_energy(
    target_cal: f64,
    protein_g: f64,
    goal: TargetGoal,
    config: &EnergySplitConfig,
) -> (f64, f64) {
    let remaining = (protein_g.mul_add(-KCAL_PER_GRAM_PROTEIN, target_cal)).max(0.0);

    let carb_ratio = match goal {
        TargetGoal::Increase => config.increase_carb_ratio,
        TargetGoal::Decrease => config.decrease_carb_ratio,
        TargetGoal::Healthy => config.healthy_carb_ratio,
    };
    let fat_ratio = 1.0 - carb_ratio;

    let carb_g = (remaining * carb_ratio / KCAL_PER_GRAM_CARB).round();
    let fat_g = (remaining * fat_ratio / KCAL_PER_GRAM_FAT).round();
    (carb_g, fat_g)
}

/// Calculate the complete recommended nutrition for a validated profile
///
/// This is the main entry point combining BMR, TDEE, the goal-adjusted
/// calorie target, and the macro split. BMR and TDEE are retained in the
/// result as diagnostics.
#[must_use]
pub fn calculate_recommended_nutrition(
    profile: &UserProfileData,
    strategy: ProteinStrategy,
    config: &NutritionConfig,
) -> RecommendedNutrition {
    let bmr = calculate_bmr(
        profile.weight,
        profile.height,
        profile.age,
        profile.gender,
        &config.bmr,
    );

    let tdee = calculate_tdee(bmr, profile.activity_level, &config.activity_factors);

    let cal = calculate_target_calories(tdee, profile.target_goal, &config.calorie_adjustment);

    let protein = calculate_protein_grams(
        profile.target_weight,
        profile.target_goal,
        profile.activity_level,
        strategy,
        &config.protein,
    );

    let (carb, fat) = split_remaining_energy(cal, protein, profile.target_goal, &config.energy_split);

    RecommendedNutrition {
        cal,
        carb,
        protein,
        fat,
        bmr,
        tdee,
    }
}
