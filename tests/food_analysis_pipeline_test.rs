// ABOUTME: End-to-end tests for the AI response analysis pipeline
// ABOUTME: Extraction, normalization defaults, total preservation, idempotence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealscope contributors
//! Pipeline tests for AI meal analysis
//!
//! Covers the full raw-text-to-entity flow:
//! - JSON extraction from prose, fences, and bare payloads
//! - numeric totals preserved verbatim, missing totals summed from items
//! - per-item default substitution
//! - absence collapse for undecodable and malformed payloads
//! - idempotence when a normalized analysis is fed back as raw input

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use mealscope::analysis::{analyze_response, normalize_food_analysis, AnalysisState};
use mealscope::parse_food_analysis;

mod common;

// ============================================================================
// EXTRACTION + DECODE
// ============================================================================

#[test]
fn test_parse_prose_wrapped_payload() {
    let raw = concat!(
        "Here is the nutritional breakdown you asked for:\n\n",
        "{\"items\": [{\"name\": \"Banana\", \"calories\": 105, \"protein\": 1.3, ",
        "\"carbs\": 27, \"fat\": 0.4, \"quantity\": \"1 medium\"}], ",
        "\"healthInsights\": [\"🍌 Good pre-workout carb source\"]}\n\n",
        "Let me know if you need anything else!"
    );

    let analysis = parse_food_analysis(raw).expect("prose-wrapped payload must parse");
    assert_eq!(analysis.items.len(), 1);
    assert_eq!(analysis.items[0].name, "Banana");
    assert_eq!(analysis.items[0].quantity, "1 medium");
    assert_eq!(
        analysis.health_insights,
        vec!["🍌 Good pre-workout carb source"]
    );
}

#[test]
fn test_parse_fenced_empty_items() {
    let analysis = parse_food_analysis("```json\n{\"items\":[]}\n```").expect("fenced payload");
    assert!(analysis.items.is_empty());
    assert!(analysis.total_calories.abs() < f64::EPSILON);
    assert!(analysis.total_protein.abs() < f64::EPSILON);
    assert!(analysis.total_carbs.abs() < f64::EPSILON);
    assert!(analysis.total_fat.abs() < f64::EPSILON);
    assert!(analysis.health_insights.is_empty());
}

#[test]
fn test_parse_no_json_is_absent() {
    common::init_tracing();
    assert!(parse_food_analysis("no json here").is_none());
}

#[test]
fn test_parse_malformed_json_is_absent() {
    common::init_tracing();
    assert!(parse_food_analysis("{\"items\": [unquoted]}").is_none());
}

#[test]
fn test_parse_missing_items_is_absent() {
    common::init_tracing();
    assert!(parse_food_analysis("{\"totalCalories\": 500}").is_none());
}

// ============================================================================
// TOTALS: VERBATIM WHEN NUMERIC, ITEM SUM OTHERWISE
// ============================================================================

#[test]
fn test_provided_totals_preserved_regardless_of_items() {
    let raw = concat!(
        "{\"items\": [{\"name\": \"Rice\", \"calories\": 200, \"protein\": 4, ",
        "\"carbs\": 45, \"fat\": 0.5}], ",
        "\"totalCalories\": 123, \"totalProtein\": 45.5, ",
        "\"totalCarbs\": 6, \"totalFat\": 7}"
    );

    let analysis = parse_food_analysis(raw).expect("payload with all totals");
    assert!((analysis.total_calories - 123.0).abs() < f64::EPSILON);
    assert!((analysis.total_protein - 45.5).abs() < f64::EPSILON);
    assert!((analysis.total_carbs - 6.0).abs() < f64::EPSILON);
    assert!((analysis.total_fat - 7.0).abs() < f64::EPSILON);
}

#[test]
fn test_missing_totals_are_order_preserving_item_sums() {
    let raw = concat!(
        "{\"items\": [",
        "{\"name\": \"Eggs\", \"calories\": 155, \"protein\": 13, \"carbs\": 1.1, \"fat\": 11},",
        "{\"name\": \"Toast\", \"calories\": 75, \"protein\": 2.5, \"carbs\": 13, \"fat\": 1}",
        "], \"totalCalories\": 230}"
    );

    let analysis = parse_food_analysis(raw).expect("payload with partial totals");
    // Provided total kept verbatim
    assert!((analysis.total_calories - 230.0).abs() < f64::EPSILON);
    // Missing totals are exact item sums
    assert!((analysis.total_protein - 15.5).abs() < 1e-9);
    assert!((analysis.total_carbs - 14.1).abs() < 1e-9);
    assert!((analysis.total_fat - 12.0).abs() < 1e-9);
}

// ============================================================================
// PER-ITEM DEFAULTS
// ============================================================================

#[test]
fn test_invalid_item_fields_default_without_aborting() {
    let raw = concat!(
        "{\"items\": [",
        "{\"name\": null, \"calories\": \"many\", \"protein\": true},",
        "{\"name\": \"Yogurt\", \"calories\": 59, \"protein\": 10, \"carbs\": 3.6, ",
        "\"fat\": 0.4, \"quantity\": \"100 g\"}",
        "]}"
    );

    let analysis = parse_food_analysis(raw).expect("mixed-quality items");
    assert_eq!(analysis.items[0].name, "Unknown food");
    assert!(analysis.items[0].calories.abs() < f64::EPSILON);
    assert!(analysis.items[0].protein.abs() < f64::EPSILON);
    assert_eq!(analysis.items[0].quantity, "1 serving");
    assert_eq!(analysis.items[1].name, "Yogurt");
    // Summed totals include the defaulted zeros in order
    assert!((analysis.total_calories - 59.0).abs() < 1e-9);
}

// ============================================================================
// IDEMPOTENCE
// ============================================================================

#[test]
fn test_renormalizing_normalized_analysis_is_identity() {
    let raw = concat!(
        "{\"items\": [",
        "{\"name\": \"Salmon\", \"calories\": 208, \"protein\": 20, \"carbs\": 0, \"fat\": 13},",
        "{\"calories\": 31, \"protein\": 2.6}",
        "], \"totalFat\": 99, \"healthInsights\": [\"🐟 Rich in omega-3\"]}"
    );

    let first = parse_food_analysis(raw).expect("first pass");
    let reencoded = serde_json::to_value(&first).expect("serialize normalized analysis");
    let second = normalize_food_analysis(&reencoded).expect("second pass");

    assert_eq!(first.items, second.items);
    assert!((first.total_calories - second.total_calories).abs() < f64::EPSILON);
    assert!((first.total_protein - second.total_protein).abs() < f64::EPSILON);
    assert!((first.total_carbs - second.total_carbs).abs() < f64::EPSILON);
    assert!((first.total_fat - second.total_fat).abs() < f64::EPSILON);
    assert_eq!(first.health_insights, second.health_insights);
}

// ============================================================================
// EXPLICIT OUTCOME STATES
// ============================================================================

#[test]
fn test_analyze_response_terminal_states() {
    let ready = analyze_response("{\"items\": []}");
    assert!(ready.is_ready());
    assert!(ready.value().is_some());

    let failed = analyze_response("I could not identify any food in the image.");
    assert_eq!(
        failed,
        AnalysisState::Failed("analysis unavailable".to_owned())
    );
}
