// ABOUTME: Single validation boundary from untrusted AI payloads to FoodAnalysis
// ABOUTME: Items required; per-field defaults; totals kept verbatim or summed from items
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealscope contributors

//! Payload normalization.
//!
//! The decoded AI payload is untrusted: fields may be missing, mistyped, or
//! partially filled. This module is the one place where the loose
//! [`serde_json::Value`] shape crosses into the strict [`FoodAnalysis`]
//! entity. Nothing untyped leaks past it.
//!
//! The only hard requirement is an `items` array; everything else degrades to
//! documented defaults, item by item, field by field.

use chrono::Utc;
use serde_json::Value;
use tracing::warn;

use crate::analysis::extractor::extract_json_candidate;
use crate::errors::{AnalysisError, AnalysisResult};
use crate::models::{FoodAnalysis, FoodItem};

/// Name substituted when the payload omits or mistypes an item name.
const UNKNOWN_FOOD_NAME: &str = "Unknown food";

/// Quantity substituted when the payload omits an item quantity.
const DEFAULT_QUANTITY: &str = "1 serving";

/// Parse a raw AI response into a [`FoodAnalysis`].
///
/// This is the analysis boundary: extraction failures (no decodable JSON) and
/// shape failures (no valid `items` array) both collapse to `None`. The raw
/// text and underlying error are logged for operators; callers render a
/// generic "analysis unavailable" state on absence and never see a reason
/// string.
#[must_use]
pub fn parse_food_analysis(raw_text: &str) -> Option<FoodAnalysis> {
    match analyze_text(raw_text) {
        Ok(analysis) => Some(analysis),
        Err(error) => {
            warn!(%error, raw_text, "meal analysis unavailable");
            None
        }
    }
}

/// Extract, decode, and normalize in one pass.
fn analyze_text(raw_text: &str) -> AnalysisResult<FoodAnalysis> {
    let candidate = extract_json_candidate(raw_text);
    let value: Value = serde_json::from_str(candidate)?;
    normalize_food_analysis(&value)
}

/// Validate and repair a decoded payload into a strict [`FoodAnalysis`].
///
/// - `items` must be an array, otherwise the whole operation fails with
///   [`AnalysisError::ShapeInvalid`] - no partial result.
/// - Each item is normalized independently; no item can abort the batch.
/// - Each aggregate total is kept verbatim when the payload carried a number
///   (even when inconsistent with the item sum), otherwise replaced by the
///   sum of the corresponding per-item field in item order.
/// - `healthInsights` survives only as an array; its string elements are kept
///   in order.
/// - The result is stamped with the current time.
///
/// # Errors
///
/// Returns [`AnalysisError::ShapeInvalid`] when `items` is missing or not an
/// array.
pub fn normalize_food_analysis(value: &Value) -> AnalysisResult<FoodAnalysis> {
    let raw_items = value
        .get("items")
        .and_then(Value::as_array)
        .ok_or(AnalysisError::ShapeInvalid)?;

    let items: Vec<FoodItem> = raw_items.iter().map(normalize_item).collect();

    let total_calories = total_or_item_sum(value, "totalCalories", &items, |item| item.calories);
    let total_protein = total_or_item_sum(value, "totalProtein", &items, |item| item.protein);
    let total_carbs = total_or_item_sum(value, "totalCarbs", &items, |item| item.carbs);
    let total_fat = total_or_item_sum(value, "totalFat", &items, |item| item.fat);

    let health_insights = value
        .get("healthInsights")
        .and_then(Value::as_array)
        .map(|lines| {
            lines
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default();

    Ok(FoodAnalysis {
        items,
        total_calories,
        total_protein,
        total_carbs,
        total_fat,
        health_insights,
        created_at: Utc::now(),
    })
}

/// Normalize one raw item, substituting defaults field by field.
///
/// Numeric values are kept as provided; only a missing or non-numeric field
/// becomes 0. A non-object item degrades to all defaults rather than aborting
/// the batch.
fn normalize_item(raw: &Value) -> FoodItem {
    FoodItem {
        name: raw
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or(UNKNOWN_FOOD_NAME)
            .to_owned(),
        calories: numeric_field(raw, "calories"),
        protein: numeric_field(raw, "protein"),
        carbs: numeric_field(raw, "carbs"),
        fat: numeric_field(raw, "fat"),
        quantity: raw
            .get("quantity")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_QUANTITY)
            .to_owned(),
    }
}

fn numeric_field(raw: &Value, key: &str) -> f64 {
    raw.get(key).and_then(Value::as_f64).unwrap_or(0.0)
}

/// Keep a provided numeric total verbatim, or sum the per-item field.
///
/// A provided number wins even when it disagrees with the item sum; no
/// reconciliation is attempted.
fn total_or_item_sum(
    value: &Value,
    key: &str,
    items: &[FoodItem],
    field: impl Fn(&FoodItem) -> f64,
) -> f64 {
    value
        .get(key)
        .and_then(Value::as_f64)
        .unwrap_or_else(|| items.iter().map(field).sum())
}
