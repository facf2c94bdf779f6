// ABOUTME: User nutrition profiles, calculator results, and flat persistence rows
// ABOUTME: Enum parsing is lossy with documented defaults; rows convert into typed profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealscope contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Biological gender for BMR calculations
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male (higher BMR constant)
    #[default]
    Male,
    /// Female (lower BMR constant)
    Female,
}

impl Gender {
    /// Parse gender from a stored string, falling back to the default.
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "female" => Self::Female,
            _ => Self::default(),
        }
    }
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Sedentary (little/no exercise)
    Sedentary,
    /// Lightly active (1-3 days/week)
    LightlyActive,
    /// Moderately active (3-5 days/week)
    #[default]
    ModeratelyActive,
    /// Very active (6-7 days/week)
    VeryActive,
    /// Extra active (hard training 2x/day)
    ExtraActive,
}

impl ActivityLevel {
    /// Parse activity level from a stored string, falling back to the default.
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "sedentary" => Self::Sedentary,
            "lightly_active" => Self::LightlyActive,
            "very_active" => Self::VeryActive,
            "extra_active" => Self::ExtraActive,
            _ => Self::default(),
        }
    }
}

/// Health goal driving the calorie offset and macro split
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HealthGoal {
    /// Caloric deficit for weight loss
    WeightLoss,
    /// Caloric balance
    #[default]
    Maintenance,
    /// Caloric surplus for weight gain
    WeightGain,
}

impl HealthGoal {
    /// Parse health goal from a stored string, falling back to the default.
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "weight_loss" => Self::WeightLoss,
            "weight_gain" => Self::WeightGain,
            _ => Self::default(),
        }
    }
}

/// Typed user profile consumed by the calorie calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserNutritionProfile {
    /// Owning user id
    pub id: Uuid,
    /// Age in years (default 30 when the row omitted it)
    pub age: u32,
    /// Biological gender (default male)
    pub gender: Gender,
    /// Height in centimeters
    pub height_cm: f64,
    /// Current body weight in kilograms
    pub weight_kg: f64,
    /// Activity level (default moderately active)
    pub activity_level: ActivityLevel,
    /// Health goal (default maintenance)
    pub goal: HealthGoal,
}

/// Complete calorie calculator output.
///
/// A pure function of the profile: any input change recomputes the whole
/// record, never a partial patch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalorieCalculatorResult {
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: f64,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee: f64,
    /// Daily calorie target after the goal offset (kcal/day)
    pub target_calories: f64,
    /// Daily protein target (grams)
    pub protein_g: f64,
    /// Daily carbohydrate target (grams)
    pub carbs_g: f64,
    /// Daily fat target (grams)
    pub fat_g: f64,
}

/// Flat profile row as stored by the persistence collaborator.
///
/// Every field is optional: profile onboarding is incremental and older rows
/// predate some columns. [`Self::into_profile`] applies the documented
/// defaults; non-positive height/weight values are left as-is here and
/// clamped by the calculator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfileRow {
    /// Age in years
    pub age: Option<u32>,
    /// Gender as stored text
    pub gender: Option<String>,
    /// Height in centimeters
    pub height_cm: Option<f64>,
    /// Current weight in kilograms
    pub current_weight_kg: Option<f64>,
    /// Activity level as stored text
    pub activity_level: Option<String>,
    /// Health goal as stored text
    pub health_goal: Option<String>,
}

impl UserProfileRow {
    /// Convert the stored row into a typed profile for `user_id`.
    #[must_use]
    pub fn into_profile(self, user_id: Uuid) -> UserNutritionProfile {
        UserNutritionProfile {
            id: user_id,
            age: self.age.unwrap_or(30),
            gender: self
                .gender
                .as_deref()
                .map_or_else(Gender::default, Gender::from_str_lossy),
            height_cm: self.height_cm.unwrap_or(0.0),
            weight_kg: self.current_weight_kg.unwrap_or(0.0),
            activity_level: self
                .activity_level
                .as_deref()
                .map_or_else(ActivityLevel::default, ActivityLevel::from_str_lossy),
            goal: self
                .health_goal
                .as_deref()
                .map_or_else(HealthGoal::default, HealthGoal::from_str_lossy),
        }
    }
}

/// Weight measurement row, keyed by user id on the persistence side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightEntryRow {
    /// Measured body weight in kilograms
    pub weight_kg: f64,
    /// When the measurement was recorded
    pub recorded_at: DateTime<Utc>,
}
