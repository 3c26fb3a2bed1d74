// ABOUTME: Intelligence module root: nutrition target computation
// ABOUTME: Re-exports the pure target calculator functions
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Nutrition target intelligence.

/// Pure BMR/TDEE/macro target calculator
pub mod target_calculator;

pub use target_calculator::{
    calculate_bmr, calculate_protein_grams, calculate_recommended_nutrition,
    calculate_target_calories, calculate_tdee, split_remaining_energy, ProteinStrategy,
};
