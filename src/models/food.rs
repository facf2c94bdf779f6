// ABOUTME: Strictly-typed meal analysis entities produced by the normalizer
// ABOUTME: FoodItem and FoodAnalysis round-trip the AI payload's camelCase wire shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealscope contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Individual food item within an analyzed meal.
///
/// Every field is guaranteed present after normalization: missing or invalid
/// values have already been substituted with the documented defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    /// Food name ("Unknown food" when the payload omitted or mistyped it)
    pub name: String,
    /// Calories for the stated quantity (kcal)
    pub calories: f64,
    /// Protein for the stated quantity (grams)
    pub protein: f64,
    /// Carbohydrates for the stated quantity (grams)
    pub carbs: f64,
    /// Fat for the stated quantity (grams)
    pub fat: f64,
    /// Human-readable quantity ("1 serving" when omitted)
    pub quantity: String,
}

/// Complete analysis of one meal, as reported by the AI model and normalized
/// into a trustworthy record.
///
/// Constructed only by [`crate::analysis::normalizer`]; callers treat it as an
/// immutable view model. Each aggregate total is the raw provided value when
/// the payload carried a number, otherwise the sum of the corresponding
/// per-item field in item order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodAnalysis {
    /// Items in the order the model listed them
    pub items: Vec<FoodItem>,
    /// Total calories (kcal)
    pub total_calories: f64,
    /// Total protein (grams)
    pub total_protein: f64,
    /// Total carbohydrates (grams)
    pub total_carbs: f64,
    /// Total fat (grams)
    pub total_fat: f64,
    /// Freeform health insight lines, possibly empty
    pub health_insights: Vec<String>,
    /// When this analysis was produced
    pub created_at: DateTime<Utc>,
}
