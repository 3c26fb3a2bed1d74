// ABOUTME: Biometric profile types, the raw-profile mapper, and the cache hash
// ABOUTME: Gender, TargetGoal, ActivityLevel, RawUserProfile, UserProfileData
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! User profile types feeding the nutrition target calculator.
//!
//! The auth-context collaborator supplies profile fields as optional strings;
//! [`UserProfileData::from_raw`] validates completeness and shape before any
//! calculation runs. An incomplete profile is not an error: the mapper
//! returns `None` and callers substitute the documented fallback nutrition.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Gender for BMR calculations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male gender (Mifflin-St Jeor +5 constant)
    Male,
    /// Female gender (Mifflin-St Jeor -161 constant)
    Female,
    /// Other gender, calculated with the female constant
    Other,
}

impl Gender {
    /// Parse a gender string; `None` for unrecognized values
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    /// Canonical wire label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }
}

/// Weight goal driving calorie adjustment and macro split
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TargetGoal {
    /// Gain weight (daily surplus)
    Increase,
    /// Lose weight (daily deficit, floored)
    Decrease,
    /// Maintain weight
    Healthy,
}

impl TargetGoal {
    /// Parse a goal string; `None` for unrecognized values
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "increase" => Some(Self::Increase),
            "decrease" => Some(Self::Decrease),
            "healthy" => Some(Self::Healthy),
            _ => None,
        }
    }

    /// Canonical wire label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Increase => "increase",
            Self::Decrease => "decrease",
            Self::Healthy => "healthy",
        }
    }
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Low,
    /// Moderate weekly exercise
    Moderate,
    /// Frequent exercise
    High,
    /// Hard daily training
    #[serde(rename = "very high")]
    VeryHigh,
}

impl ActivityLevel {
    /// Parse an activity string; accepts both `"very high"` and `"very_high"`
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "low" => Some(Self::Low),
            "moderate" => Some(Self::Moderate),
            "high" => Some(Self::High),
            "very high" | "very_high" => Some(Self::VeryHigh),
            _ => None,
        }
    }

    /// Canonical wire label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::VeryHigh => "very high",
        }
    }
}

/// Profile fields as supplied by the auth-context collaborator.
///
/// Every field is optional; the mapper decides whether the set is usable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawUserProfile {
    /// Age in years, as a numeric string
    pub age: Option<String>,
    /// Weight in kilograms, as a numeric string
    pub weight: Option<String>,
    /// Height in centimeters, as a numeric string
    pub height: Option<String>,
    /// Gender label (`male` | `female` | `other`)
    pub gender: Option<String>,
    /// Body-fat category label
    pub body_fat: Option<String>,
    /// Weight goal (`increase` | `decrease` | `healthy`)
    pub target_goal: Option<String>,
    /// Target weight in kilograms, as a numeric string
    pub target_weight: Option<String>,
    /// Activity level (`low` | `moderate` | `high` | `very high`)
    pub activity_level: Option<String>,
}

/// Validated biometric profile ready for calculation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfileData {
    /// Age in years
    pub age: f64,
    /// Weight in kilograms
    pub weight: f64,
    /// Height in centimeters
    pub height: f64,
    /// Gender
    pub gender: Gender,
    /// Body-fat category, carried through untyped
    pub body_fat: String,
    /// Weight goal
    pub target_goal: TargetGoal,
    /// Target weight in kilograms
    pub target_weight: f64,
    /// Activity level
    pub activity_level: ActivityLevel,
}

/// Parse a numeric string field into a finite f64
fn parse_finite(value: &str) -> Option<f64> {
    let parsed: f64 = value.trim().parse().ok()?;
    parsed.is_finite().then_some(parsed)
}

/// Require a present, non-empty string field
fn required<'a>(value: Option<&'a String>) -> Option<&'a str> {
    let value = value?.trim();
    (!value.is_empty()).then_some(value)
}

impl UserProfileData {
    /// Map a raw profile into a validated one.
    ///
    /// Returns `None` unless all eight fields are present, non-empty, enums
    /// parse, and numeric strings parse to finite numbers. Absence is a
    /// normal state, not an error.
    #[must_use]
    pub fn from_raw(raw: &RawUserProfile) -> Option<Self> {
        let age = parse_finite(required(raw.age.as_ref())?)?;
        let weight = parse_finite(required(raw.weight.as_ref())?)?;
        let height = parse_finite(required(raw.height.as_ref())?)?;
        let gender = Gender::parse(required(raw.gender.as_ref())?)?;
        let body_fat = required(raw.body_fat.as_ref())?.to_owned();
        let target_goal = TargetGoal::parse(required(raw.target_goal.as_ref())?)?;
        let target_weight = parse_finite(required(raw.target_weight.as_ref())?)?;
        let activity_level = ActivityLevel::parse(required(raw.activity_level.as_ref())?)?;

        Some(Self {
            age,
            weight,
            height,
            gender,
            body_fat,
            target_goal,
            target_weight,
            activity_level,
        })
    }

    /// Deterministic hash over the calculation-relevant fields.
    ///
    /// Used as the nutrition cache key: two profiles hash equal exactly when
    /// every field that affects the calculation is equal.
    #[must_use]
    pub fn cache_hash(&self) -> String {
        let serialized = format!(
            "age={};weight={};height={};gender={};body_fat={};target_goal={};target_weight={};activity_level={}",
            self.age,
            self.weight,
            self.height,
            self.gender.as_str(),
            self.body_fat,
            self.target_goal.as_str(),
            self.target_weight,
            self.activity_level.as_str(),
        );
        let digest = Sha256::digest(serialized.as_bytes());
        hex::encode(digest)
    }
}
