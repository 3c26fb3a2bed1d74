// ABOUTME: Lifecycle tests for the create plan session
// ABOUTME: Fallback vs cached nutrition target, invalidation, policy wiring
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutriplan_core::config::NutritionConfig;
use nutriplan_core::intelligence::ProteinStrategy;
use nutriplan_core::logging::init_logging_for_tests;
use nutriplan_core::models::RawUserProfile;
use nutriplan_core::planner::{CreatePlanSession, DuplicatePolicy};

mod common;

#[test]
fn test_incomplete_profile_serves_fallback() {
    init_logging_for_tests();
    let config = NutritionConfig::default();
    let mut session = CreatePlanSession::new();

    let target = session.recommended_nutrition(
        &RawUserProfile::default(),
        ProteinStrategy::Dynamic,
        &config,
    );

    assert!((target.cal - config.fallback.cal).abs() < f64::EPSILON);
    assert!((target.protein - config.fallback.protein).abs() < f64::EPSILON);
    assert_eq!(
        session.cache().computations(),
        0,
        "fallback must not touch the calculator"
    );
}

#[test]
fn test_complete_profile_is_computed_and_cached() {
    let config = NutritionConfig::default();
    let mut session = CreatePlanSession::new();
    let raw = common::complete_raw_profile();

    let first = session.recommended_nutrition(&raw, ProteinStrategy::Dynamic, &config);
    let second = session.recommended_nutrition(&raw, ProteinStrategy::Dynamic, &config);

    assert_eq!(first, second);
    assert!((first.bmr - 1730.0).abs() < f64::EPSILON);
    assert_eq!(session.cache().computations(), 1);
}

#[test]
fn test_out_of_the_ordinary_profile_still_computes() {
    // Every field present and parsing to a finite number is enough; the
    // session computes a target for values no adult profile would carry.
    let config = NutritionConfig::default();
    let mut session = CreatePlanSession::new();

    let mut raw = common::complete_raw_profile();
    raw.age = Some("8".to_owned());
    raw.weight = Some("28".to_owned());
    raw.height = Some("128".to_owned());
    raw.target_goal = Some("healthy".to_owned());
    raw.target_weight = Some("30".to_owned());

    let target = session.recommended_nutrition(&raw, ProteinStrategy::Dynamic, &config);

    // BMR 1045, TDEE 1620: computed, not the fallback, not an error
    assert!((target.bmr - 1045.0).abs() < f64::EPSILON);
    assert!((target.cal - 1620.0).abs() < f64::EPSILON);
    assert_eq!(session.cache().computations(), 1);
}

#[test]
fn test_invalidation_forces_recompute() {
    let config = NutritionConfig::default();
    let mut session = CreatePlanSession::new();
    let raw = common::complete_raw_profile();

    session.recommended_nutrition(&raw, ProteinStrategy::Dynamic, &config);
    session.invalidate_nutrition_cache();
    session.recommended_nutrition(&raw, ProteinStrategy::Dynamic, &config);

    assert_eq!(session.cache().computations(), 2);
}

#[test]
fn test_profile_completion_switches_off_the_fallback() {
    let config = NutritionConfig::default();
    let mut session = CreatePlanSession::new();

    let mut raw = common::complete_raw_profile();
    raw.height = None;
    let fallback = session.recommended_nutrition(&raw, ProteinStrategy::Dynamic, &config);
    assert!((fallback.cal - config.fallback.cal).abs() < f64::EPSILON);

    raw.height = Some("180".to_owned());
    let computed = session.recommended_nutrition(&raw, ProteinStrategy::Dynamic, &config);
    assert!((computed.bmr - 1730.0).abs() < f64::EPSILON);
}

#[test]
fn test_session_store_uses_reject_policy() {
    let mut session = CreatePlanSession::new();
    assert_eq!(session.store().policy(), DuplicatePolicy::Reject);

    session
        .store_mut()
        .add_food_to_meal(common::food("f1", 100.0), "breakfast", 1, None);
    assert!(!session
        .store_mut()
        .add_food_to_meal(common::food("f1", 100.0), "breakfast", 1, None));
    assert_eq!(
        session.store().day_meals(1).unwrap()["breakfast"].items.len(),
        1
    );
}
