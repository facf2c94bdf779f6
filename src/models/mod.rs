// ABOUTME: Data models for food analysis, user profiles, and calculator results
// ABOUTME: Wire types use the AI payload's camelCase shape; rows mirror flat storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealscope contributors

//! Core data models.
//!
//! - [`food`]: the strictly-typed meal analysis produced by the normalizer
//! - [`profile`]: user nutrition profiles, calculator results, and the flat
//!   persistence rows they are loaded from

pub mod food;
pub mod profile;

pub use food::{FoodAnalysis, FoodItem};
pub use profile::{
    ActivityLevel, CalorieCalculatorResult, Gender, HealthGoal, UserNutritionProfile,
    UserProfileRow, WeightEntryRow,
};
