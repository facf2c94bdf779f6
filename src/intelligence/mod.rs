// ABOUTME: Nutrition intelligence module - deterministic calorie and macro math
// ABOUTME: Pure functions of the user profile; recomputed wholesale on any change
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealscope contributors

//! Nutrition intelligence.

pub mod calorie_calculator;

pub use calorie_calculator::{
    calculate_bmr, calculate_calorie_targets, calculate_macro_targets, calculate_target_calories,
    calculate_tdee,
};
