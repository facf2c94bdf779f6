// ABOUTME: AI meal-analysis parsing and nutrition target calculation library
// ABOUTME: Pure transforms - no inference, persistence, or presentation concerns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealscope contributors

#![deny(unsafe_code)]

//! # Mealscope
//!
//! Pure transform library for AI-assisted nutrition tracking. The surrounding
//! application asks an external AI model to describe a meal and receives back an
//! opaque text blob; this crate owns the hard part of turning that blob into a
//! strictly-typed [`models::FoodAnalysis`], plus the deterministic calorie and
//! macro target calculator derived from a user profile.
//!
//! ## Modules
//!
//! - **analysis**: response extraction, payload normalization, and insight line
//!   parsing for AI model output
//! - **intelligence**: BMR/TDEE/calorie target and macronutrient calculations
//! - **models**: food analysis entities, user profiles, and persistence rows
//! - **config**: calculation coefficients with documented scientific defaults
//! - **errors**: typed error taxonomy for the analysis and config boundaries
//!
//! Everything here is synchronous, stateless, and CPU-bound. Awaiting the AI
//! service, persisting rows, and rendering results are the caller's concerns.

/// Response extraction, payload normalization, and insight line parsing
pub mod analysis;

/// Calculation coefficients with documented scientific defaults
pub mod config;

/// Typed error taxonomy for the analysis and config boundaries
pub mod errors;

/// Nutrition intelligence: BMR, TDEE, calorie targets, macro distribution
pub mod intelligence;

/// Food analysis entities, user profiles, and persistence-boundary rows
pub mod models;

pub use analysis::{parse_food_analysis, AnalysisState, InsightLine};
pub use intelligence::calorie_calculator::calculate_calorie_targets;
pub use models::{CalorieCalculatorResult, FoodAnalysis, FoodItem, UserNutritionProfile};
