// ABOUTME: Algorithm tests for the nutrition target calculator
// ABOUTME: Covers BMR, TDEE, calorie floor, protein tables, and energy split
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Comprehensive algorithm tests for the nutrition target calculator:
//! - Mifflin-St Jeor BMR (male/female/other)
//! - TDEE with all four activity levels
//! - Goal-adjusted calorie targets and the 1200 kcal floor
//! - Protein selection under both strategies, with clamping
//! - Remaining-energy split ratios
//! - Determinism and macro non-negativity across the full goal/activity grid

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutriplan_core::config::{
    ActivityFactorsConfig, BmrConfig, CalorieAdjustmentConfig, EnergySplitConfig, NutritionConfig,
    ProteinTargetConfig,
};
use nutriplan_core::intelligence::{
    calculate_bmr, calculate_protein_grams, calculate_recommended_nutrition,
    calculate_target_calories, calculate_tdee, split_remaining_energy, ProteinStrategy,
};
use nutriplan_core::models::{ActivityLevel, Gender, TargetGoal, UserProfileData};

fn profile(goal: TargetGoal, activity: ActivityLevel) -> UserProfileData {
    UserProfileData {
        age: 30.0,
        weight: 75.0,
        height: 180.0,
        gender: Gender::Male,
        body_fat: "moderate".to_owned(),
        target_goal: goal,
        target_weight: 70.0,
        activity_level: activity,
    }
}

// ============================================================================
// BMR CALCULATION TESTS - Mifflin-St Jeor Formula
// ============================================================================

#[test]
fn test_bmr_male_typical() {
    // 10 * 75 + 6.25 * 180 - 5 * 30 + 5 = 1730
    let bmr = calculate_bmr(75.0, 180.0, 30.0, Gender::Male, &BmrConfig::default());
    assert!((bmr - 1730.0).abs() < f64::EPSILON);
}

#[test]
fn test_bmr_female_typical() {
    // 10 * 60 + 6.25 * 165 - 5 * 25 - 161 = 1345.25, rounded to 1345
    let bmr = calculate_bmr(60.0, 165.0, 25.0, Gender::Female, &BmrConfig::default());
    assert!((bmr - 1345.0).abs() < f64::EPSILON);
}

#[test]
fn test_bmr_other_matches_female() {
    let female = calculate_bmr(60.0, 165.0, 25.0, Gender::Female, &BmrConfig::default());
    let other = calculate_bmr(60.0, 165.0, 25.0, Gender::Other, &BmrConfig::default());
    assert!((female - other).abs() < f64::EPSILON);
}

#[test]
fn test_bmr_computes_for_any_finite_input() {
    // The calculator does not gate its inputs; completeness and shape checks
    // live in the profile mapper. Unusual but finite values still compute.
    let config = BmrConfig::default();
    // 8-year-old: 10 * 28 + 6.25 * 128 - 5 * 8 + 5 = 1045
    let child = calculate_bmr(28.0, 128.0, 8.0, Gender::Male, &config);
    assert!((child - 1045.0).abs() < f64::EPSILON);
    // 310kg: 10 * 310 + 6.25 * 180 - 5 * 40 + 5 = 4030
    let heavy = calculate_bmr(310.0, 180.0, 40.0, Gender::Male, &config);
    assert!((heavy - 4030.0).abs() < f64::EPSILON);
}

#[test]
fn test_bmr_deterministic() {
    let config = BmrConfig::default();
    let first = calculate_bmr(75.0, 180.0, 30.0, Gender::Male, &config);
    let second = calculate_bmr(75.0, 180.0, 30.0, Gender::Male, &config);
    assert!((first - second).abs() < f64::EPSILON);
}

// ============================================================================
// TDEE CALCULATION TESTS - Activity Multipliers
// ============================================================================

#[test]
fn test_tdee_all_levels() {
    let config = ActivityFactorsConfig::default();
    let bmr = 1500.0;

    let cases = [
        (ActivityLevel::Low, 1800.0),
        (ActivityLevel::Moderate, 2325.0),
        (ActivityLevel::High, 2587.5_f64.round()),
        (ActivityLevel::VeryHigh, 2850.0),
    ];
    for (level, expected) in cases {
        let tdee = calculate_tdee(bmr, level, &config);
        assert!(
            (tdee - expected).abs() < f64::EPSILON,
            "TDEE for {level:?} should be {expected}, got {tdee}"
        );
    }
}

#[test]
fn test_tdee_deterministic() {
    let config = ActivityFactorsConfig::default();
    let first = calculate_tdee(1730.0, ActivityLevel::Moderate, &config);
    let second = calculate_tdee(1730.0, ActivityLevel::Moderate, &config);
    assert!((first - second).abs() < f64::EPSILON);
}

// ============================================================================
// TARGET CALORIE TESTS - Goal Adjustments and Floor
// ============================================================================

#[test]
fn test_target_calories_healthy_unchanged() {
    let config = CalorieAdjustmentConfig::default();
    let target = calculate_target_calories(2400.0, TargetGoal::Healthy, &config);
    assert!((target - 2400.0).abs() < f64::EPSILON);
}

#[test]
fn test_target_calories_increase_surplus() {
    let config = CalorieAdjustmentConfig::default();
    let target = calculate_target_calories(2400.0, TargetGoal::Increase, &config);
    assert!((target - 2600.0).abs() < f64::EPSILON);
}

#[test]
fn test_target_calories_decrease_deficit() {
    let config = CalorieAdjustmentConfig::default();
    let target = calculate_target_calories(2400.0, TargetGoal::Decrease, &config);
    assert!((target - 2100.0).abs() < f64::EPSILON);
}

#[test]
fn test_target_calorie_floor_holds_for_low_tdee() {
    let config = CalorieAdjustmentConfig::default();
    for tdee in [900.0, 1100.0, 1300.0, 1499.0] {
        let target = calculate_target_calories(tdee, TargetGoal::Decrease, &config);
        assert!(
            target >= 1200.0,
            "decrease target for TDEE {tdee} fell below the floor: {target}"
        );
    }
}

#[test]
fn test_floor_via_full_pipeline() {
    // Small, older, sedentary profile: BMR 927, TDEE 1112, 1112 - 300 < 1200
    let profile = UserProfileData {
        age: 60.0,
        weight: 45.0,
        height: 150.0,
        gender: Gender::Female,
        body_fat: "low".to_owned(),
        target_goal: TargetGoal::Decrease,
        target_weight: 43.0,
        activity_level: ActivityLevel::Low,
    };
    let nutrition = calculate_recommended_nutrition(
        &profile,
        ProteinStrategy::Dynamic,
        &NutritionConfig::default(),
    );
    assert!((nutrition.cal - 1200.0).abs() < f64::EPSILON);
}

// ============================================================================
// PROTEIN TARGET TESTS - Tables and Clamping
// ============================================================================

#[test]
fn test_protein_dynamic_table_selection() {
    let config = ProteinTargetConfig::default();
    // decrease x moderate = 1.4 g/kg over 70kg target weight
    let grams = calculate_protein_grams(
        70.0,
        TargetGoal::Decrease,
        ActivityLevel::Moderate,
        ProteinStrategy::Dynamic,
        &config,
    );
    assert!((grams - 98.0).abs() < f64::EPSILON);
}

#[test]
fn test_protein_simple_table_selection() {
    let config = ProteinTargetConfig::default();
    // simple table ignores activity: decrease = 1.6 g/kg
    for activity in [
        ActivityLevel::Low,
        ActivityLevel::Moderate,
        ActivityLevel::High,
        ActivityLevel::VeryHigh,
    ] {
        let grams = calculate_protein_grams(
            70.0,
            TargetGoal::Decrease,
            activity,
            ProteinStrategy::Simple,
            &config,
        );
        assert!((grams - 112.0).abs() < f64::EPSILON);
    }
}

#[test]
fn test_protein_factor_clamped() {
    let config = ProteinTargetConfig {
        simple_increase: 3.5, // above the clamp window
        ..Default::default()
    };
    let grams = calculate_protein_grams(
        70.0,
        TargetGoal::Increase,
        ActivityLevel::Low,
        ProteinStrategy::Simple,
        &config,
    );
    // clamped to 2.2 g/kg
    assert!((grams - 154.0).abs() < f64::EPSILON);
}

// ============================================================================
// ENERGY SPLIT TESTS
// ============================================================================

#[test]
fn test_split_decrease_ratios() {
    let config = EnergySplitConfig::default();
    // remaining = 2382 - 98 * 4 = 1990
    let (carb, fat) = split_remaining_energy(2382.0, 98.0, TargetGoal::Decrease, &config);
    assert!((carb - (1990.0_f64 * 0.45 / 4.0).round()).abs() < f64::EPSILON);
    assert!((fat - (1990.0_f64 * 0.55 / 9.0).round()).abs() < f64::EPSILON);
}

#[test]
fn test_split_increase_and_healthy_share_ratios() {
    let config = EnergySplitConfig::default();
    let increase = split_remaining_energy(2600.0, 100.0, TargetGoal::Increase, &config);
    let healthy = split_remaining_energy(2600.0, 100.0, TargetGoal::Healthy, &config);
    assert_eq!(increase, healthy);
}

#[test]
fn test_split_never_negative_when_protein_exceeds_target() {
    let config = EnergySplitConfig::default();
    let (carb, fat) = split_remaining_energy(1200.0, 400.0, TargetGoal::Decrease, &config);
    assert!(carb >= 0.0);
    assert!(fat >= 0.0);
}

// ============================================================================
// FULL PIPELINE TESTS
// ============================================================================

#[test]
fn test_recommended_nutrition_decrease_moderate() {
    let nutrition = calculate_recommended_nutrition(
        &profile(TargetGoal::Decrease, ActivityLevel::Moderate),
        ProteinStrategy::Dynamic,
        &NutritionConfig::default(),
    );

    // BMR 1730; TDEE 1730 * 1.55 = 2681.5 -> 2682; target 2682 - 300 = 2382
    assert!((nutrition.bmr - 1730.0).abs() < f64::EPSILON);
    assert!((nutrition.tdee - 2682.0).abs() < f64::EPSILON);
    assert!((nutrition.cal - 2382.0).abs() < f64::EPSILON);
    // protein 70 * 1.4 = 98; remaining 1990; carb 224, fat 122
    assert!((nutrition.protein - 98.0).abs() < f64::EPSILON);
    assert!((nutrition.carb - 224.0).abs() < f64::EPSILON);
    assert!((nutrition.fat - 122.0).abs() < f64::EPSILON);
}

#[test]
fn test_pipeline_computes_for_young_profile() {
    // All fields present and finite; no range gate turns this into a failure.
    let young = UserProfileData {
        age: 8.0,
        weight: 28.0,
        height: 128.0,
        gender: Gender::Male,
        body_fat: "low".to_owned(),
        target_goal: TargetGoal::Healthy,
        target_weight: 30.0,
        activity_level: ActivityLevel::Moderate,
    };
    let nutrition = calculate_recommended_nutrition(
        &young,
        ProteinStrategy::Dynamic,
        &NutritionConfig::default(),
    );
    // BMR 1045; TDEE 1045 * 1.55 = 1619.75 -> 1620
    assert!((nutrition.bmr - 1045.0).abs() < f64::EPSILON);
    assert!((nutrition.tdee - 1620.0).abs() < f64::EPSILON);
    assert!((nutrition.cal - 1620.0).abs() < f64::EPSILON);
}

#[test]
fn test_macro_non_negativity_across_grid() {
    let config = NutritionConfig::default();
    let goals = [TargetGoal::Increase, TargetGoal::Decrease, TargetGoal::Healthy];
    let activities = [
        ActivityLevel::Low,
        ActivityLevel::Moderate,
        ActivityLevel::High,
        ActivityLevel::VeryHigh,
    ];
    let strategies = [ProteinStrategy::Dynamic, ProteinStrategy::Simple];

    for goal in goals {
        for activity in activities {
            for strategy in strategies {
                let nutrition =
                    calculate_recommended_nutrition(&profile(goal, activity), strategy, &config);
                assert!(nutrition.protein >= 0.0, "{goal:?}/{activity:?}");
                assert!(nutrition.carb >= 0.0, "{goal:?}/{activity:?}");
                assert!(nutrition.fat >= 0.0, "{goal:?}/{activity:?}");
                assert!(nutrition.cal >= 1200.0, "{goal:?}/{activity:?}");
            }
        }
    }
}

#[test]
fn test_recommended_nutrition_idempotent() {
    let config = NutritionConfig::default();
    let input = profile(TargetGoal::Healthy, ActivityLevel::High);
    let first = calculate_recommended_nutrition(&input, ProteinStrategy::Dynamic, &config);
    let second = calculate_recommended_nutrition(&input, ProteinStrategy::Dynamic, &config);
    assert_eq!(first, second);
}
