// ABOUTME: External plan payload schema, normalization, load and export
// ABOUTME: Handles double-encoded JSON and alternate upstream field names
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! External plan payload handling.
//!
//! The backend's plan representation is inconsistently shaped: the whole plan
//! may arrive double-encoded as a JSON string, and item fields go by several
//! names (`cal`/`calories`, `carb`/`carbohydrates`, ...). The fallback-field
//! matrix lives here, in one schema, rather than scattered through the store.
//!
//! Loading parses the complete payload *before* touching any state, so a
//! malformed payload leaves the store byte-for-byte unchanged and surfaces a
//! single error value. Nothing in this module panics on foreign input.

use crate::constants::{
    MEAL_ICON_GENERIC, MEAL_NAME_FALLBACK, MEAL_TIME_FALLBACK, RESERVED_MEAL_IDS,
};
use crate::errors::{AppError, AppResult};
use crate::models::{FoodItem, FoodSource, MealData, MealPlanData, MealSlot};
use crate::planner::store::{CustomMealsPerDay, MealPlanStore};
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Plan payload root: day number (stringly keyed upstream) to day content
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlanPayload(pub BTreeMap<String, DayPayload>);

/// One day of the external plan
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DayPayload {
    /// Day calorie total as transmitted (re-derived on export)
    #[serde(rename = "totalCal", default)]
    pub total_cal: f64,
    /// Meals keyed by meal id
    #[serde(default)]
    pub meals: BTreeMap<String, MealPayload>,
}

/// One meal of the external plan
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MealPayload {
    /// Display label
    #[serde(default)]
    pub name: Option<String>,
    /// `"HH:mm"` time
    #[serde(default)]
    pub time: Option<String>,
    /// Food items
    #[serde(default)]
    pub items: Vec<FoodItemPayload>,
    /// Meal calorie total as transmitted (re-derived on export)
    #[serde(rename = "totalCal", default)]
    pub total_cal: f64,
}

/// External food item with every known upstream field spelling.
///
/// All fields optional; [`FoodItemPayload::normalize`] fills the gaps.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FoodItemPayload {
    /// Item id; synthesized when absent
    #[serde(default)]
    pub id: Option<String>,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Calories (`cal` or `calories`)
    #[serde(default, alias = "calories")]
    pub cal: Option<f64>,
    /// Carbohydrates (`carb` or `carbohydrates`)
    #[serde(default, alias = "carbohydrates")]
    pub carb: Option<f64>,
    /// Fat (`fat` or `fats`)
    #[serde(default, alias = "fats")]
    pub fat: Option<f64>,
    /// Protein (`protein` or `proteins`)
    #[serde(default, alias = "proteins")]
    pub protein: Option<f64>,
    /// Image reference (`img` or `image`)
    #[serde(default, alias = "image")]
    pub img: Option<String>,
    /// Ingredient free text
    #[serde(default)]
    pub ingredient: Option<String>,
    /// Source catalog
    #[serde(default)]
    pub source: Option<FoodSource>,
    /// User-food marker (`isUserFood` upstream)
    #[serde(default, alias = "isUserFood")]
    pub is_user_food: Option<bool>,
}

impl FoodItemPayload {
    /// Coerce the external shape into the internal [`FoodItem`].
    ///
    /// Missing numerics default to 0; a missing id is synthesized from a
    /// timestamp plus a random value; `source` falls back to the catalog
    /// unless the user-food marker is set.
    #[must_use]
    pub fn normalize(self) -> FoodItem {
        let is_user_food = self.is_user_food.unwrap_or(false);
        let source = self.source.unwrap_or(if is_user_food {
            FoodSource::UserFood
        } else {
            FoodSource::Foods
        });
        FoodItem {
            id: self.id.unwrap_or_else(synthesized_id),
            name: self.name.unwrap_or_default(),
            cal: self.cal.unwrap_or(0.0),
            carb: self.carb.unwrap_or(0.0),
            fat: self.fat.unwrap_or(0.0),
            protein: self.protein.unwrap_or(0.0),
            img: self.img,
            ingredient: self.ingredient.unwrap_or_default(),
            source,
            is_user_food,
        }
    }
}

impl From<&FoodItem> for FoodItemPayload {
    fn from(item: &FoodItem) -> Self {
        Self {
            id: Some(item.id.clone()),
            name: Some(item.name.clone()),
            cal: Some(item.cal),
            carb: Some(item.carb),
            fat: Some(item.fat),
            protein: Some(item.protein),
            img: item.img.clone(),
            ingredient: Some(item.ingredient.clone()),
            source: Some(item.source),
            is_user_food: Some(item.is_user_food),
        }
    }
}

/// Synthesize an id for an item the payload shipped without one
fn synthesized_id() -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let suffix: u32 = rand::thread_rng().gen_range(0..1_000_000);
    format!("food_{millis}_{suffix:06}")
}

/// Parse a plan payload value, unwrapping the double-encoded string form.
///
/// # Errors
///
/// Returns `InvalidFormat` when the value is neither a plan object nor a
/// JSON string that parses into one.
pub fn parse_plan_payload(value: &Value) -> AppResult<PlanPayload> {
    let parsed = match value {
        Value::String(encoded) => serde_json::from_str(encoded),
        other => serde_json::from_value(other.clone()),
    };
    parsed.map_err(|err| {
        AppError::invalid_format("plan payload does not match the expected shape").with_source(err)
    })
}

impl MealPlanStore {
    /// Load an external plan payload into this store.
    ///
    /// The payload is parsed completely first; on success the plan data and
    /// per-day custom meals are replaced in one step. Every meal id outside
    /// the reserved defaults is registered as a custom slot for its day so it
    /// shows up in the slot list. On failure the store is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` for unparseable or mis-shaped payloads.
    pub fn load_plan_payload(&mut self, value: &Value) -> AppResult<()> {
        let payload = parse_plan_payload(value)?;

        let mut plan = MealPlanData::new();
        let mut customs = CustomMealsPerDay::new();

        for (day_key, day_payload) in payload.0 {
            let Ok(day) = day_key.parse::<u32>() else {
                tracing::warn!(day_key, "skipping non-numeric day key in plan payload");
                continue;
            };

            for (meal_id, meal_payload) in day_payload.meals {
                let name = meal_payload
                    .name
                    .unwrap_or_else(|| MEAL_NAME_FALLBACK.to_owned());
                let time = meal_payload
                    .time
                    .unwrap_or_else(|| MEAL_TIME_FALLBACK.to_owned());

                if !RESERVED_MEAL_IDS.contains(&meal_id.as_str()) {
                    let slot = MealSlot {
                        id: meal_id.clone(),
                        name: name.clone(),
                        icon: MEAL_ICON_GENERIC.to_owned(),
                        time: time.clone(),
                    };
                    customs.entry(day).or_default().push(slot);
                }

                let items: Vec<FoodItem> = meal_payload
                    .items
                    .into_iter()
                    .map(FoodItemPayload::normalize)
                    .collect();

                // Empty meals never enter the plan; the pruning invariant
                // holds from the moment of load.
                if items.is_empty() {
                    continue;
                }

                plan.entry(day)
                    .or_default()
                    .insert(meal_id, MealData { time, name, items });
            }
        }

        self.replace_plan(plan, customs);
        Ok(())
    }

    /// Export the store's plan in the backend payload shape.
    ///
    /// Per-meal and per-day `totalCal` are re-derived from the store's own
    /// aggregation, never copied from a previous payload.
    #[must_use]
    pub fn export_plan_payload(&self) -> PlanPayload {
        let mut days = BTreeMap::new();
        for (day, meals) in self.plan() {
            let mut meal_payloads = BTreeMap::new();
            for (meal_id, meal) in meals {
                meal_payloads.insert(
                    meal_id.clone(),
                    MealPayload {
                        name: Some(meal.name.clone()),
                        time: Some(meal.time.clone()),
                        items: meal.items.iter().map(FoodItemPayload::from).collect(),
                        total_cal: meal.totals().cal,
                    },
                );
            }
            days.insert(
                day.to_string(),
                DayPayload {
                    total_cal: self.day_nutrition(*day).cal,
                    meals: meal_payloads,
                },
            );
        }
        PlanPayload(days)
    }
}
