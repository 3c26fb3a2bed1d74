// ABOUTME: Core data model module root
// ABOUTME: Plan structures, user profile types, schedule types, nutrition result
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common data structures for meal plans and nutrition targets.

/// Computed nutrition target result
pub mod nutrition;
/// Meal-plan data structures
pub mod plan;
/// Biometric profile types and mapping
pub mod profile;
/// Meal slot and schedule types
pub mod schedule;

pub use nutrition::RecommendedNutrition;
pub use plan::{DayMeals, FoodItem, FoodSource, MealData, MealPlanData, NutritionTotals};
pub use profile::{ActivityLevel, Gender, RawUserProfile, TargetGoal, UserProfileData};
pub use schedule::{MealSlot, MealSlotInfo, MealTimeRow, MealTimeSchedule};
