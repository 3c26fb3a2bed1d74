// ABOUTME: Named constants for meal slots, energy densities, and fallbacks
// ABOUTME: Eliminates magic numbers and strings from planner and calculator code
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Application constants for meal slots and nutrition energy densities.

/// Meal slot identifiers reserved for built-in defaults.
///
/// Meal ids found in an external plan payload that are *not* in this list are
/// registered as per-day custom meals on load.
pub const RESERVED_MEAL_IDS: [&str; 4] = ["breakfast", "lunch", "dinner", "snack"];

/// Built-in breakfast slot id
pub const MEAL_ID_BREAKFAST: &str = "breakfast";

/// Built-in lunch slot id
pub const MEAL_ID_LUNCH: &str = "lunch";

/// Built-in dinner slot id
pub const MEAL_ID_DINNER: &str = "dinner";

/// Display label for the breakfast default slot
pub const MEAL_NAME_BREAKFAST: &str = "มื้อเช้า";

/// Display label for the lunch default slot
pub const MEAL_NAME_LUNCH: &str = "มื้อกลางวัน";

/// Display label for the dinner default slot
pub const MEAL_NAME_DINNER: &str = "มื้อเย็น";

/// Generic meal label used when a slot cannot be resolved by id
pub const MEAL_NAME_FALLBACK: &str = "มื้ออาหาร";

/// Time used when a slot cannot be resolved by id
pub const MEAL_TIME_FALLBACK: &str = "00:00";

/// Default time for the breakfast slot
pub const MEAL_TIME_BREAKFAST: &str = "07:00";

/// Default time for the lunch slot
pub const MEAL_TIME_LUNCH: &str = "12:00";

/// Default time for the dinner slot
pub const MEAL_TIME_DINNER: &str = "18:00";

/// Default icon for the breakfast slot
pub const MEAL_ICON_BREAKFAST: &str = "sunrise";

/// Default icon for the lunch slot
pub const MEAL_ICON_LUNCH: &str = "sun";

/// Default icon for the dinner slot
pub const MEAL_ICON_DINNER: &str = "moon";

/// Icon for slots created from unmatched server schedule rows
pub const MEAL_ICON_GENERIC: &str = "utensils";

/// Energy density of protein (kcal per gram)
pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;

/// Energy density of carbohydrate (kcal per gram)
pub const KCAL_PER_GRAM_CARB: f64 = 4.0;

/// Energy density of fat (kcal per gram)
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;
