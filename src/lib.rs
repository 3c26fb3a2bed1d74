// ABOUTME: Main library entry point for the nutriplan core
// ABOUTME: Meal-plan state model and personalized nutrition-target engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # Nutriplan Core
//!
//! The in-memory core of a nutrition-planning client: the meal-plan state
//! model (days -> meals -> food items), its consistency-preserving mutation
//! operations, derived nutrition aggregation, and the personalized
//! nutrition-target calculator with its caching policy.
//!
//! ## Architecture
//!
//! Three components, built bottom-up:
//! - **Calculator** ([`intelligence`]): pure BMR/TDEE/macro-split functions
//! - **Cache** ([`cache`]): single-slot memoization keyed by a profile hash
//!   with a time-based expiry
//! - **Store** ([`planner`]): the day-indexed plan structure behind the
//!   create and edit sessions
//!
//! Transport, persistence mechanics, and rendering are external
//! collaborators; this crate consumes already-shaped values at its
//! boundaries and performs no I/O of its own.
//!
//! ## Example
//!
//! ```rust
//! use nutriplan_core::config::NutritionConfig;
//! use nutriplan_core::intelligence::ProteinStrategy;
//! use nutriplan_core::models::RawUserProfile;
//! use nutriplan_core::planner::CreatePlanSession;
//!
//! let config = NutritionConfig::default();
//! let mut session = CreatePlanSession::new();
//!
//! // Incomplete profile: the documented fallback target is served.
//! let target = session.recommended_nutrition(
//!     &RawUserProfile::default(),
//!     ProteinStrategy::Dynamic,
//!     &config,
//! );
//! assert!((target.cal - 2000.0).abs() < f64::EPSILON);
//! ```

/// Nutrition target cache
pub mod cache;

/// Configuration management
pub mod config;

/// Application constants
pub mod constants;

/// Unified error handling system with standard error codes
pub mod errors;

/// Nutrition target intelligence
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Common data structures
pub mod models;

/// Meal plan state management
pub mod planner;
