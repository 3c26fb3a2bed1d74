// ABOUTME: Meal-plan data structures: food items, meals, day maps, totals
// ABOUTME: FoodItem, MealData, DayMeals, MealPlanData, and NutritionTotals
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Catalog a food item originated from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FoodSource {
    /// Food created or edited by the user
    UserFood,
    /// Food taken from the shared catalog
    Foods,
}

/// An atomic edible entry inside one meal slot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodItem {
    /// Identifier, unique within the plan after insertion
    pub id: String,
    /// Display name
    pub name: String,
    /// Calories (kcal)
    pub cal: f64,
    /// Carbohydrates (grams)
    pub carb: f64,
    /// Fat (grams)
    pub fat: f64,
    /// Protein (grams)
    pub protein: f64,
    /// Image reference, when the catalog provides one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
    /// Free-text ingredient description
    #[serde(default)]
    pub ingredient: String,
    /// Catalog of origin
    pub source: FoodSource,
    /// User-food marker, redundant with `source` but independently settable
    pub is_user_food: bool,
}

/// One meal within one day: display metadata plus its ordered items
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealData {
    /// Meal time as an `"HH:mm"` string
    pub time: String,
    /// Display label
    pub name: String,
    /// Food items, insertion order = display order
    pub items: Vec<FoodItem>,
}

impl MealData {
    /// Sum nutrition over this meal's items
    #[must_use]
    pub fn totals(&self) -> NutritionTotals {
        self.items
            .iter()
            .fold(NutritionTotals::default(), |acc, item| acc.plus_item(item))
    }
}

/// All meals with food for one day, keyed by meal id
pub type DayMeals = BTreeMap<String, MealData>;

/// Root plan structure: 1-based day number to that day's meals.
///
/// Invariant: a day key exists only while at least one of its meals holds at
/// least one item. Empty meals and days are pruned on removal.
pub type MealPlanData = BTreeMap<u32, DayMeals>;

/// Aggregated nutrition over a meal or a day
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct NutritionTotals {
    /// Calories (kcal)
    pub cal: f64,
    /// Carbohydrates (grams)
    pub carb: f64,
    /// Fat (grams)
    pub fat: f64,
    /// Protein (grams)
    pub protein: f64,
}

impl NutritionTotals {
    /// Accumulate one food item into the totals
    #[must_use]
    pub fn plus_item(self, item: &FoodItem) -> Self {
        Self {
            cal: self.cal + item.cal,
            carb: self.carb + item.carb,
            fat: self.fat + item.fat,
            protein: self.protein + item.protein,
        }
    }

    /// Accumulate another totals value
    #[must_use]
    pub fn plus(self, other: Self) -> Self {
        Self {
            cal: self.cal + other.cal,
            carb: self.carb + other.carb,
            fat: self.fat + other.fat,
            protein: self.protein + other.protein,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, cal: f64) -> FoodItem {
        FoodItem {
            id: id.to_owned(),
            name: "test".to_owned(),
            cal,
            carb: 10.0,
            fat: 5.0,
            protein: 8.0,
            img: None,
            ingredient: String::new(),
            source: FoodSource::Foods,
            is_user_food: false,
        }
    }

    #[test]
    fn test_meal_totals_sum_items() {
        let meal = MealData {
            time: "07:00".to_owned(),
            name: "breakfast".to_owned(),
            items: vec![item("a", 100.0), item("b", 50.0)],
        };
        let totals = meal.totals();
        assert!((totals.cal - 150.0).abs() < f64::EPSILON);
        assert!((totals.carb - 20.0).abs() < f64::EPSILON);
        assert!((totals.protein - 16.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_meal_totals_are_zero() {
        let meal = MealData {
            time: "12:00".to_owned(),
            name: "lunch".to_owned(),
            items: vec![],
        };
        assert_eq!(meal.totals(), NutritionTotals::default());
    }

    #[test]
    fn test_food_source_serialization() {
        #[allow(clippy::unwrap_used)]
        let json = serde_json::to_string(&FoodSource::UserFood).unwrap();
        assert_eq!(json, "\"user_food\"");
    }
}
