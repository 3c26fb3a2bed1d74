// ABOUTME: Shared fixtures for integration tests
// ABOUTME: Food item and raw profile builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(dead_code, missing_docs)]

use nutriplan_core::models::{FoodItem, FoodSource, RawUserProfile};

/// Build a catalog food item with the given id and calories
pub fn food(id: &str, cal: f64) -> FoodItem {
    FoodItem {
        id: id.to_owned(),
        name: format!("food {id}"),
        cal,
        carb: 20.0,
        fat: 5.0,
        protein: 10.0,
        img: None,
        ingredient: String::new(),
        source: FoodSource::Foods,
        is_user_food: false,
    }
}

/// Build a food item with explicit macros
pub fn food_with_macros(id: &str, cal: f64, carb: f64, fat: f64, protein: f64) -> FoodItem {
    FoodItem {
        id: id.to_owned(),
        name: format!("food {id}"),
        cal,
        carb,
        fat,
        protein,
        img: None,
        ingredient: String::new(),
        source: FoodSource::Foods,
        is_user_food: false,
    }
}

/// A complete raw profile: 30-year-old male, 75kg, 180cm, decrease goal
pub fn complete_raw_profile() -> RawUserProfile {
    RawUserProfile {
        age: Some("30".to_owned()),
        weight: Some("75".to_owned()),
        height: Some("180".to_owned()),
        gender: Some("male".to_owned()),
        body_fat: Some("moderate".to_owned()),
        target_goal: Some("decrease".to_owned()),
        target_weight: Some("70".to_owned()),
        activity_level: Some("moderate".to_owned()),
    }
}
