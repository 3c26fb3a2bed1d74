// ABOUTME: Meal slot and server meal-time schedule types
// ABOUTME: MealSlot, MealSlotInfo, MealTimeRow, MealTimeSchedule
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::constants::{
    MEAL_ICON_BREAKFAST, MEAL_ICON_DINNER, MEAL_ICON_LUNCH, MEAL_ID_BREAKFAST, MEAL_ID_DINNER,
    MEAL_ID_LUNCH, MEAL_NAME_BREAKFAST, MEAL_NAME_DINNER, MEAL_NAME_LUNCH, MEAL_TIME_BREAKFAST,
    MEAL_TIME_DINNER, MEAL_TIME_LUNCH,
};
use serde::{Deserialize, Serialize};

/// A named meal slot the user can add food to.
///
/// A slot exists independently of whether food has been added yet. Default
/// slots apply to every day; custom slots are scoped to a single day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MealSlot {
    /// Slot identifier (fixed id for defaults, generated id for customs)
    pub id: String,
    /// Display label
    pub name: String,
    /// Icon reference for rendering
    pub icon: String,
    /// Slot time as an `"HH:mm"` string
    pub time: String,
}

impl MealSlot {
    /// Built-in default slots: breakfast, lunch, dinner
    #[must_use]
    pub fn builtin_defaults() -> Vec<Self> {
        vec![
            Self {
                id: MEAL_ID_BREAKFAST.to_owned(),
                name: MEAL_NAME_BREAKFAST.to_owned(),
                icon: MEAL_ICON_BREAKFAST.to_owned(),
                time: MEAL_TIME_BREAKFAST.to_owned(),
            },
            Self {
                id: MEAL_ID_LUNCH.to_owned(),
                name: MEAL_NAME_LUNCH.to_owned(),
                icon: MEAL_ICON_LUNCH.to_owned(),
                time: MEAL_TIME_LUNCH.to_owned(),
            },
            Self {
                id: MEAL_ID_DINNER.to_owned(),
                name: MEAL_NAME_DINNER.to_owned(),
                icon: MEAL_ICON_DINNER.to_owned(),
                time: MEAL_TIME_DINNER.to_owned(),
            },
        ]
    }
}

/// Explicit name/time override passed alongside an add-food call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MealSlotInfo {
    /// Display label for the meal
    pub name: String,
    /// Meal time as an `"HH:mm"` string
    pub time: String,
}

/// One row of the server-provided meal-time schedule
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealTimeRow {
    /// Server row id
    #[serde(default)]
    pub id: Option<i64>,
    /// Meal display name; matched against the canonical default labels
    pub meal_name: String,
    /// Meal time as an `"HH:mm"` string
    pub meal_time: String,
    /// Server ordering hint; rows without one keep append order
    #[serde(default)]
    pub sort_order: Option<i64>,
    /// Disabled rows remove their matching default slot entirely
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

const fn default_is_active() -> bool {
    true
}

/// Server meal-time schedule payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealTimeSchedule {
    /// Schedule rows
    pub meals: Vec<MealTimeRow>,
    /// Whether the app should notify at meal times (consumed elsewhere)
    #[serde(default)]
    pub notify_on_time: bool,
}
