// ABOUTME: Server meal-time schedule merge into the default slot list
// ABOUTME: MealTimeSource trait, pure merge, best-effort sync wrapper
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Best-effort meal-time schedule sync (create session).
//!
//! The server can override the built-in default slots: rename or re-time a
//! canonical slot, disable one outright, or contribute extra globally-visible
//! slots. The sync is a background enhancement: a fetch or parse failure
//! leaves the defaults exactly as they were and is reported through the
//! returned status instead of an error, so callers can observe the outcome
//! without being forced to handle it.

use crate::constants::MEAL_ICON_GENERIC;
use crate::errors::AppResult;
use crate::models::{MealSlot, MealTimeSchedule};
use crate::planner::store::MealPlanStore;
use async_trait::async_trait;
use uuid::Uuid;

/// Source of the server meal-time schedule
#[async_trait]
pub trait MealTimeSource: Send + Sync {
    /// Fetch the current meal-time schedule.
    ///
    /// # Errors
    ///
    /// Returns an error when the upstream call or its decoding fails.
    async fn fetch_meal_times(&self) -> AppResult<MealTimeSchedule>;
}

/// Outcome of a schedule sync attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleSyncStatus {
    /// The schedule was merged into the default slot list
    Applied {
        /// Defaults a name-matched active server row overrode
        overridden: usize,
        /// Defaults removed by `is_active: false` rows
        removed: usize,
        /// Extra global slots contributed by unmatched rows
        added: usize,
    },
    /// The defaults were left untouched
    Skipped {
        /// Why the sync did not apply
        reason: String,
    },
}

/// Merge a server schedule into a default slot list. Pure.
///
/// - A row whose `meal_name` matches a default's label overrides that
///   default's name and time; the icon is preserved, never overridden.
/// - A matching row with `is_active: false` removes the default entirely.
/// - Unmatched active rows become additional always-present slots.
/// - Final order follows the server's `sort_order` where present; entries
///   without one keep their append order after the sorted ones.
#[must_use]
pub fn apply_meal_times(defaults: &[MealSlot], schedule: &MealTimeSchedule) -> Vec<MealSlot> {
    let mut merged: Vec<(Option<i64>, MealSlot)> = Vec::new();

    for default in defaults {
        match schedule
            .meals
            .iter()
            .find(|row| row.meal_name == default.name)
        {
            Some(row) if !row.is_active => {}
            Some(row) => {
                merged.push((
                    row.sort_order,
                    MealSlot {
                        id: default.id.clone(),
                        name: row.meal_name.clone(),
                        icon: default.icon.clone(),
                        time: row.meal_time.clone(),
                    },
                ));
            }
            None => merged.push((None, default.clone())),
        }
    }

    for row in &schedule.meals {
        let matches_default = defaults.iter().any(|slot| slot.name == row.meal_name);
        if matches_default || !row.is_active {
            continue;
        }
        let id = row
            .id
            .map_or_else(
                || format!("schedule_{}", Uuid::new_v4().simple()),
                |row_id| format!("schedule_{row_id}"),
            );
        merged.push((
            row.sort_order,
            MealSlot {
                id,
                name: row.meal_name.clone(),
                icon: MEAL_ICON_GENERIC.to_owned(),
                time: row.meal_time.clone(),
            },
        ));
    }

    // Stable sort: server-ordered entries first, append-order entries after.
    let mut indexed: Vec<(usize, Option<i64>, MealSlot)> = merged
        .into_iter()
        .enumerate()
        .map(|(index, (order, slot))| (index, order, slot))
        .collect();
    indexed.sort_by_key(|(index, order, _)| (order.unwrap_or(i64::MAX), *index));
    indexed.into_iter().map(|(_, _, slot)| slot).collect()
}

/// Fetch the server schedule and merge it into the store's defaults.
///
/// Never fails outward: fetch or decode errors are logged and reported as
/// [`ScheduleSyncStatus::Skipped`], with the store untouched.
pub async fn sync_meal_times(
    store: &mut MealPlanStore,
    source: &dyn MealTimeSource,
) -> ScheduleSyncStatus {
    let schedule = match source.fetch_meal_times().await {
        Ok(schedule) => schedule,
        Err(err) => {
            tracing::warn!(error = %err, "meal-time schedule sync skipped");
            return ScheduleSyncStatus::Skipped {
                reason: err.to_string(),
            };
        }
    };

    let before = store.default_meals().to_vec();
    let merged = apply_meal_times(&before, &schedule);

    // A default counts as overridden when an active row matched its name,
    // even if the row carries the same time the default already had.
    let overridden = before
        .iter()
        .filter(|slot| {
            schedule
                .meals
                .iter()
                .any(|row| row.is_active && row.meal_name == slot.name)
        })
        .count();
    let removed = before
        .iter()
        .filter(|slot| !merged.iter().any(|new| new.id == slot.id))
        .count();
    let added = merged
        .iter()
        .filter(|new| !before.iter().any(|slot| slot.id == new.id))
        .count();

    store.set_default_meals(merged);
    tracing::debug!(overridden, removed, added, "meal-time schedule applied");
    ScheduleSyncStatus::Applied {
        overridden,
        removed,
        added,
    }
}
