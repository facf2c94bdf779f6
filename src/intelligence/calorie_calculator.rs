// ABOUTME: BMR, TDEE, calorie target, and macronutrient calculations
// ABOUTME: Deterministic pure functions of the user profile and config tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealscope contributors

//! Calorie Calculator Module
//!
//! Derives daily calorie and macronutrient targets from a user nutrition
//! profile. Every step is a pure lookup or formula: identical profiles
//! produce identical results, including floating-point evaluation order, and
//! any input change recomputes the whole record.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting
//!   energy expenditure. *American Journal of Clinical Nutrition*, 51(2),
//!   241-247. <https://doi.org/10.1093/ajcn/51.2.241>
//! - `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
//!   (activity factors).
//! - Wishnofsky, M. (1958). Caloric equivalents of gained or lost weight
//!   (±500 kcal/day offsets).

use crate::config::{ActivityFactorsConfig, BmrConfig, NutritionConfig};
use crate::models::{
    ActivityLevel, CalorieCalculatorResult, Gender, HealthGoal, UserNutritionProfile,
};

/// Energy density of protein and carbohydrates (kcal per gram).
const KCAL_PER_GRAM_PROTEIN_CARBS: f64 = 4.0;

/// Energy density of fat (kcal per gram).
const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation (1990).
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_constant`
/// - Men: +5
/// - Women: -161
///
/// Non-positive height or weight is clamped to the configured fallbacks
/// rather than raised; upstream is expected to have validated these fields.
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[must_use]
pub fn calculate_bmr(profile: &UserNutritionProfile, config: &BmrConfig) -> f64 {
    let weight_kg = if profile.weight_kg > 0.0 {
        profile.weight_kg
    } else {
        config.fallback_weight_kg
    };
    let height_cm = if profile.height_cm > 0.0 {
        profile.height_cm
    } else {
        config.fallback_height_cm
    };

    let weight_component = config.weight_coef * weight_kg;
    let height_component = config.height_coef * height_cm;
    let age_component = config.age_coef * f64::from(profile.age);

    let gender_constant = match profile.gender {
        Gender::Male => config.male_constant,
        Gender::Female => config.female_constant,
    };

    weight_component + height_component + age_component + gender_constant
}

/// Calculate Total Daily Energy Expenditure.
///
/// Formula: TDEE = BMR x activity factor, with the factor taken from a fixed
/// table keyed by activity level (sedentary 1.2 ... extra active 1.9).
///
/// # Reference
/// `McArdle` et al. (2010) - Exercise Physiology
#[must_use]
pub fn calculate_tdee(
    bmr: f64,
    activity_level: ActivityLevel,
    config: &ActivityFactorsConfig,
) -> f64 {
    let activity_factor = match activity_level {
        ActivityLevel::Sedentary => config.sedentary,
        ActivityLevel::LightlyActive => config.lightly_active,
        ActivityLevel::ModeratelyActive => config.moderately_active,
        ActivityLevel::VeryActive => config.very_active,
        ActivityLevel::ExtraActive => config.extra_active,
    };

    bmr * activity_factor
}

/// Apply the goal calorie offset to TDEE.
///
/// The offset is a fixed constant per goal: -500 kcal/day for weight loss,
/// +500 for weight gain, 0 for maintenance.
#[must_use]
pub fn calculate_target_calories(tdee: f64, goal: HealthGoal, config: &NutritionConfig) -> f64 {
    tdee + config.goal_offsets.offset_for_goal(goal)
}

/// Derive macro targets (grams of protein/carbs/fat) from the goal's fixed
/// percentage-of-calories split.
///
/// Uses Atwater energy densities: 4 kcal/g for protein and carbohydrates,
/// 9 kcal/g for fat.
#[must_use]
pub fn calculate_macro_targets(
    target_calories: f64,
    goal: HealthGoal,
    config: &NutritionConfig,
) -> (f64, f64, f64) {
    let (protein_pct, carbs_pct, fat_pct) = config.macro_splits.split_for_goal(goal).as_tuple();

    let protein_g =
        target_calories * f64::from(protein_pct) / 100.0 / KCAL_PER_GRAM_PROTEIN_CARBS;
    let carbs_g = target_calories * f64::from(carbs_pct) / 100.0 / KCAL_PER_GRAM_PROTEIN_CARBS;
    let fat_g = target_calories * f64::from(fat_pct) / 100.0 / KCAL_PER_GRAM_FAT;

    (protein_g, carbs_g, fat_g)
}

/// Calculate the complete daily target set for a profile.
///
/// This is the main entry point combining BMR, TDEE, goal offset, and macro
/// split. The result replaces any previously computed one; there is no
/// incremental update path.
#[must_use]
pub fn calculate_calorie_targets(
    profile: &UserNutritionProfile,
    config: &NutritionConfig,
) -> CalorieCalculatorResult {
    let bmr = calculate_bmr(profile, &config.bmr);
    let tdee = calculate_tdee(bmr, profile.activity_level, &config.activity_factors);
    let target_calories = calculate_target_calories(tdee, profile.goal, config);
    let (protein_g, carbs_g, fat_g) = calculate_macro_targets(target_calories, profile.goal, config);

    CalorieCalculatorResult {
        bmr,
        tdee,
        target_calories,
        protein_g,
        carbs_g,
        fat_g,
    }
}
