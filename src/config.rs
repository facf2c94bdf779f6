// ABOUTME: Nutrition calculation configuration with documented scientific defaults
// ABOUTME: BMR coefficients, activity multipliers, goal calorie offsets, macro splits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealscope contributors

//! Nutrition Calculation Configuration
//!
//! Coefficients and tables used by the calorie calculator. All defaults are
//! based on peer-reviewed research with citations.
//!
//! # Scientific References
//!
//! - BMR: Mifflin, M.D., et al. (1990). A new predictive equation for resting
//!   energy expenditure. *American Journal of Clinical Nutrition*, 51(2),
//!   241-247. <https://doi.org/10.1093/ajcn/51.2.241>
//! - Activity factors: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010).
//!   Exercise Physiology.
//! - Energy densities: Atwater general factors (4/4/9 kcal per gram).

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::models::HealthGoal;

/// Aggregate configuration for the calorie calculator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) formula coefficients
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
    /// Daily calorie offsets keyed by health goal
    pub goal_offsets: GoalCalorieOffsetsConfig,
    /// Macro percentage-of-calories splits keyed by health goal
    pub macro_splits: MacroSplitsConfig,
}

impl NutritionConfig {
    /// Validate every section of the configuration.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] encountered in any section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.activity_factors.validate()?;
        self.macro_splits.validate()
    }
}

/// BMR (Basal Metabolic Rate) formula configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for
/// resting energy expenditure. American Journal of Clinical Nutrition, 51(2),
/// 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub female_constant: f64,
    /// Fallback height (cm) when the stored profile value is non-positive
    pub fallback_height_cm: f64,
    /// Fallback weight (kg) when the stored profile value is non-positive
    pub fallback_weight_kg: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            weight_coef: 10.0,
            height_coef: 6.25,
            age_coef: -5.0,
            male_constant: 5.0,
            female_constant: -161.0,
            fallback_height_cm: 170.0,
            fallback_weight_kg: 70.0,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Lightly active (1-3 days/week): 1.375
    pub lightly_active: f64,
    /// Moderately active (3-5 days/week): 1.55
    pub moderately_active: f64,
    /// Very active (6-7 days/week): 1.725
    pub very_active: f64,
    /// Extra active (hard training 2x/day): 1.9
    pub extra_active: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            lightly_active: 1.375,
            moderately_active: 1.55,
            very_active: 1.725,
            extra_active: 1.9,
        }
    }
}

impl ActivityFactorsConfig {
    /// Validate that every multiplier is positive.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` for the first non-positive factor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let factors = [
            ("sedentary", self.sedentary),
            ("lightly_active", self.lightly_active),
            ("moderately_active", self.moderately_active),
            ("very_active", self.very_active),
            ("extra_active", self.extra_active),
        ];

        for (context, value) in factors {
            if value <= 0.0 {
                return Err(ConfigError::ValueOutOfRange { context, value });
            }
        }

        Ok(())
    }
}

/// Daily calorie offsets applied to TDEE, keyed by health goal
///
/// A 500 kcal/day deficit or surplus corresponds to roughly 0.45 kg of body
/// weight change per week (Wishnofsky 1958 approximation).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalCalorieOffsetsConfig {
    /// Weight loss deficit (kcal/day): -500
    pub weight_loss: f64,
    /// Maintenance offset (kcal/day): 0
    pub maintenance: f64,
    /// Weight gain surplus (kcal/day): +500
    pub weight_gain: f64,
}

impl Default for GoalCalorieOffsetsConfig {
    fn default() -> Self {
        Self {
            weight_loss: -500.0,
            maintenance: 0.0,
            weight_gain: 500.0,
        }
    }
}

impl GoalCalorieOffsetsConfig {
    /// Get the calorie offset for a health goal.
    #[must_use]
    pub const fn offset_for_goal(&self, goal: HealthGoal) -> f64 {
        match goal {
            HealthGoal::WeightLoss => self.weight_loss,
            HealthGoal::Maintenance => self.maintenance,
            HealthGoal::WeightGain => self.weight_gain,
        }
    }
}

/// Macro distribution for a single goal (protein%, carbs%, fat%)
///
/// All percentages must sum to 100.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MacroDistribution {
    /// Protein percentage of target calories (0-100)
    pub protein_pct: u8,
    /// Carbohydrate percentage of target calories (0-100)
    pub carbs_pct: u8,
    /// Fat percentage of target calories (0-100)
    pub fat_pct: u8,
}

impl MacroDistribution {
    /// Create a new macro distribution
    ///
    /// # Panics
    ///
    /// Panics in debug mode if percentages don't sum to 100
    #[must_use]
    pub const fn new(protein_pct: u8, carbs_pct: u8, fat_pct: u8) -> Self {
        debug_assert!(
            protein_pct
                .saturating_add(carbs_pct)
                .saturating_add(fat_pct)
                == 100,
            "Macro percentages must sum to 100"
        );
        Self {
            protein_pct,
            carbs_pct,
            fat_pct,
        }
    }

    /// Get as a tuple (protein, carbs, fat)
    #[must_use]
    pub const fn as_tuple(&self) -> (u8, u8, u8) {
        (self.protein_pct, self.carbs_pct, self.fat_pct)
    }
}

/// Macro percentage-of-calories splits keyed by health goal
///
/// Defaults follow common sports-nutrition practice: a higher protein share
/// during a deficit preserves lean mass (Phillips & Van Loon 2011,
/// DOI: 10.1080/02640414.2011.619204); a surplus leans on carbohydrates to
/// fuel training volume (Burke et al. 2011, DOI: 10.1080/02640414.2011.585473).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroSplitsConfig {
    /// Weight loss split: 40% protein / 30% carbs / 30% fat
    pub weight_loss: MacroDistribution,
    /// Maintenance split: 30% protein / 40% carbs / 30% fat
    pub maintenance: MacroDistribution,
    /// Weight gain split: 30% protein / 45% carbs / 25% fat
    pub weight_gain: MacroDistribution,
}

impl Default for MacroSplitsConfig {
    fn default() -> Self {
        Self {
            weight_loss: MacroDistribution::new(40, 30, 30),
            maintenance: MacroDistribution::new(30, 40, 30),
            weight_gain: MacroDistribution::new(30, 45, 25),
        }
    }
}

impl MacroSplitsConfig {
    /// Validate that all splits sum to 100%.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidMacroWeights` for the first goal whose
    /// percentages (protein + carbs + fat) do not sum to exactly 100.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let splits = [
            ("weight_loss", &self.weight_loss),
            ("maintenance", &self.maintenance),
            ("weight_gain", &self.weight_gain),
        ];

        for (context, split) in splits {
            let sum = u16::from(split.protein_pct)
                + u16::from(split.carbs_pct)
                + u16::from(split.fat_pct);
            if sum != 100 {
                return Err(ConfigError::InvalidMacroWeights { context, sum });
            }
        }

        Ok(())
    }

    /// Get the distribution for a health goal.
    #[must_use]
    pub const fn split_for_goal(&self, goal: HealthGoal) -> MacroDistribution {
        match goal {
            HealthGoal::WeightLoss => self.weight_loss,
            HealthGoal::Maintenance => self.maintenance,
            HealthGoal::WeightGain => self.weight_gain,
        }
    }
}
