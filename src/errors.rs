// ABOUTME: Error taxonomy for the analysis boundary and configuration validation
// ABOUTME: AnalysisError collapses to absence at the public API; ConfigError surfaces directly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealscope contributors

//! # Error Handling
//!
//! Two failure surfaces exist in this crate and each gets its own typed error:
//!
//! - [`AnalysisError`] covers the untrusted AI payload boundary. Both variants
//!   collapse to a single absence result at [`crate::parse_food_analysis`];
//!   the distinction only matters for operator diagnostics, which are logged
//!   with the raw response text.
//! - [`ConfigError`] covers structural validation of calculation coefficients.
//!
//! Per-field coercion failures inside the normalizer are absorbed by default
//! substitution and intentionally have no error value at all.

use thiserror::Error;

/// Failure at the AI response analysis boundary.
///
/// Neither variant reaches end users: the public parsing entry point collapses
/// both to `None` and the caller renders a generic "analysis unavailable"
/// state. The raw text and underlying error are logged for operators.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// No decodable JSON was found in the response text.
    #[error("response contained no decodable JSON: {0}")]
    ExtractionFailed(#[from] serde_json::Error),

    /// The decoded payload lacks a valid `items` array.
    #[error("decoded payload has no `items` array")]
    ShapeInvalid,
}

/// Configuration validation failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Macro percentages for a goal do not sum to 100.
    #[error("{context} macro percentages must sum to 100, got {sum}")]
    InvalidMacroWeights {
        /// Which goal's split failed validation
        context: &'static str,
        /// The offending sum
        sum: u16,
    },

    /// A multiplier or coefficient is outside its valid range.
    #[error("{context} must be positive, got {value}")]
    ValueOutOfRange {
        /// Which setting failed validation
        context: &'static str,
        /// The offending value
        value: f64,
    },
}

/// Result alias for analysis-boundary operations.
pub type AnalysisResult<T> = Result<T, AnalysisError>;
