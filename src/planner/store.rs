// ABOUTME: Meal plan state store: day -> meal -> food items with pruning
// ABOUTME: One engine parameterized by duplicate policy (reject vs rekey)
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Meal plan state store.
//!
//! Holds the day-indexed meal plan plus the slot schedules (global defaults
//! and per-day customs), and keeps them consistent under mutation. The create
//! and edit sessions share this engine; their single behavioral divergence
//! is the duplicate policy applied on insert, preserved as two variants
//! rather than unified.

use crate::constants::{
    MEAL_ICON_GENERIC, MEAL_NAME_FALLBACK, MEAL_TIME_FALLBACK,
};
use crate::models::{
    DayMeals, FoodItem, MealData, MealPlanData, MealSlot, MealSlotInfo, NutritionTotals,
};
use rand::Rng;
use std::collections::BTreeMap;
use uuid::Uuid;

/// Behavior when a food with an already-present id is added to a meal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Create session: ignore the add entirely (idempotent)
    Reject,
    /// Edit session: rewrite the incoming id to a fresh unique value and
    /// append, so the same catalog food can occupy several slots
    Rekey,
}

/// Custom meal slots per day, insertion-ordered within each day
pub type CustomMealsPerDay = BTreeMap<u32, Vec<MealSlot>>;

/// The central mutable meal-plan structure
#[derive(Debug, Clone)]
pub struct MealPlanStore {
    plan: MealPlanData,
    default_meals: Vec<MealSlot>,
    custom_meals: CustomMealsPerDay,
    policy: DuplicatePolicy,
}

impl Default for MealPlanStore {
    /// A create-session store: the reject policy is the conservative default
    fn default() -> Self {
        Self::new(DuplicatePolicy::Reject)
    }
}

impl MealPlanStore {
    /// Create an empty store with the built-in default slots
    #[must_use]
    pub fn new(policy: DuplicatePolicy) -> Self {
        Self {
            plan: MealPlanData::new(),
            default_meals: MealSlot::builtin_defaults(),
            custom_meals: CustomMealsPerDay::new(),
            policy,
        }
    }

    /// The duplicate policy this store was constructed with
    #[must_use]
    pub const fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Read-only view of the whole plan
    #[must_use]
    pub const fn plan(&self) -> &MealPlanData {
        &self.plan
    }

    /// Meals with food for one day, if any
    #[must_use]
    pub fn day_meals(&self, day: u32) -> Option<&DayMeals> {
        self.plan.get(&day)
    }

    /// Current global default slots
    #[must_use]
    pub fn default_meals(&self) -> &[MealSlot] {
        &self.default_meals
    }

    /// Replace the global default slot list (schedule sync)
    pub fn set_default_meals(&mut self, defaults: Vec<MealSlot>) {
        self.default_meals = defaults;
    }

    /// Custom slots configured for one day
    #[must_use]
    pub fn custom_meals_for_day(&self, day: u32) -> &[MealSlot] {
        self.custom_meals
            .get(&day)
            .map_or(&[], Vec::as_slice)
    }

    /// Add a food item to a meal slot of a day.
    ///
    /// The meal's display name/time are resolved by precedence: explicit
    /// `meal_info` -> existing meal entry -> slot list for that day ->
    /// built-in known id -> generic fallback. The (day, meal) entry is
    /// created lazily.
    ///
    /// Returns `false` when the reject policy drops a duplicate id; `true`
    /// when the item was appended.
    pub fn add_food_to_meal(
        &mut self,
        mut food: FoodItem,
        meal_id: &str,
        day: u32,
        meal_info: Option<&MealSlotInfo>,
    ) -> bool {
        let (name, time) = self.resolve_slot_details(day, meal_id, meal_info);

        let meal = self
            .plan
            .entry(day)
            .or_default()
            .entry(meal_id.to_owned())
            .or_insert_with(|| MealData {
                time,
                name,
                items: Vec::new(),
            });

        match self.policy {
            DuplicatePolicy::Reject => {
                if meal.items.iter().any(|item| item.id == food.id) {
                    tracing::debug!(meal_id, day, id = %food.id, "duplicate food id, add ignored");
                    return false;
                }
            }
            DuplicatePolicy::Rekey => {
                food.id = rekeyed_id(&food.id);
            }
        }

        tracing::debug!(meal_id, day, id = %food.id, "food added to meal");
        meal.items.push(food);
        true
    }

    /// Remove a food item by id from a meal.
    ///
    /// An emptied meal is deleted from its day; an emptied day is deleted
    /// from the plan. Pruning is unconditional and recursive. Unknown ids
    /// are a no-op.
    pub fn remove_food_from_meal(&mut self, food_id: &str, meal_id: &str, day: u32) {
        let Some(day_meals) = self.plan.get_mut(&day) else {
            return;
        };
        let Some(meal) = day_meals.get_mut(meal_id) else {
            return;
        };

        meal.items.retain(|item| item.id != food_id);

        if meal.items.is_empty() {
            day_meals.remove(meal_id);
        }
        if day_meals.is_empty() {
            self.plan.remove(&day);
        }
    }

    /// Replace the item matching `updated.id` in place.
    ///
    /// Ordering is preserved; no match is a no-op.
    pub fn update_food_in_meal(&mut self, updated: &FoodItem, meal_id: &str, day: u32) {
        let Some(meal) = self.plan.get_mut(&day).and_then(|meals| meals.get_mut(meal_id)) else {
            return;
        };
        if let Some(existing) = meal.items.iter_mut().find(|item| item.id == updated.id) {
            *existing = updated.clone();
        }
    }

    /// Append a custom meal slot to one day's custom list
    pub fn add_meal(&mut self, slot: MealSlot, day: u32) {
        self.custom_meals.entry(day).or_default().push(slot);
    }

    /// Build a custom slot with a generated id
    #[must_use]
    pub fn new_custom_slot(name: impl Into<String>, time: impl Into<String>) -> MealSlot {
        MealSlot {
            id: format!("custom_{}", Uuid::new_v4().simple()),
            name: name.into(),
            icon: MEAL_ICON_GENERIC.to_owned(),
            time: time.into(),
        }
    }

    /// The canonical slot list for a day: defaults first (configured order),
    /// then that day's customs in insertion order.
    #[must_use]
    pub fn all_meals_for_day(&self, day: u32) -> Vec<MealSlot> {
        let mut slots = self.default_meals.clone();
        slots.extend(self.custom_meals_for_day(day).iter().cloned());
        slots
    }

    /// Nutrition totals for one meal; all-zero when absent
    #[must_use]
    pub fn meal_nutrition(&self, day: u32, meal_id: &str) -> NutritionTotals {
        self.plan
            .get(&day)
            .and_then(|meals| meals.get(meal_id))
            .map_or_else(NutritionTotals::default, MealData::totals)
    }

    /// Nutrition totals for one day across its meals; all-zero when absent
    #[must_use]
    pub fn day_nutrition(&self, day: u32) -> NutritionTotals {
        self.plan.get(&day).map_or_else(NutritionTotals::default, |meals| {
            meals
                .values()
                .fold(NutritionTotals::default(), |acc, meal| acc.plus(meal.totals()))
        })
    }

    /// Empty the plan entirely; default and custom schedules are preserved
    pub fn clear_meal_plan(&mut self) {
        self.plan.clear();
    }

    /// Remove one day's entry entirely
    pub fn clear_day(&mut self, day: u32) {
        self.plan.remove(&day);
    }

    /// Atomically replace plan data and per-day customs (payload load)
    pub(crate) fn replace_plan(&mut self, plan: MealPlanData, customs: CustomMealsPerDay) {
        self.plan = plan;
        self.custom_meals = customs;
    }

    /// Reset plan, custom schedule, and defaults to the initial state
    pub(crate) fn reset(&mut self) {
        self.plan.clear();
        self.custom_meals.clear();
        self.default_meals = MealSlot::builtin_defaults();
    }

    /// Resolve a slot's display name and time for an add-food call
    fn resolve_slot_details(
        &self,
        day: u32,
        meal_id: &str,
        meal_info: Option<&MealSlotInfo>,
    ) -> (String, String) {
        if let Some(info) = meal_info {
            return (info.name.clone(), info.time.clone());
        }

        if let Some(existing) = self.plan.get(&day).and_then(|meals| meals.get(meal_id)) {
            return (existing.name.clone(), existing.time.clone());
        }

        if let Some(slot) = self
            .default_meals
            .iter()
            .chain(self.custom_meals_for_day(day))
            .find(|slot| slot.id == meal_id)
        {
            return (slot.name.clone(), slot.time.clone());
        }

        if let Some(builtin) = MealSlot::builtin_defaults()
            .into_iter()
            .find(|slot| slot.id == meal_id)
        {
            return (builtin.name, builtin.time);
        }

        (MEAL_NAME_FALLBACK.to_owned(), MEAL_TIME_FALLBACK.to_owned())
    }
}

/// Rewrite a food id to a fresh unique value: original + timestamp + random
fn rekeyed_id(original: &str) -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let suffix: u16 = rand::thread_rng().gen_range(0..10_000);
    format!("{original}_{millis}_{suffix:04}")
}
