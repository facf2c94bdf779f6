// ABOUTME: AI response analysis pipeline - extraction, normalization, insight parsing
// ABOUTME: AnalysisState models per-call outcomes explicitly instead of ambient flags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealscope contributors

//! Analysis of AI model responses.
//!
//! Data flow: raw text → [`extractor`] → candidate JSON → decode →
//! [`normalizer`] → [`crate::models::FoodAnalysis`]. Each stage is pure and
//! synchronous; the only suspension point in the surrounding system is
//! awaiting the AI service itself, which is the caller's concern.

pub mod extractor;
pub mod insight_line;
pub mod normalizer;

pub use extractor::extract_json_candidate;
pub use insight_line::InsightLine;
pub use normalizer::{normalize_food_analysis, parse_food_analysis};

use crate::models::FoodAnalysis;

/// Explicit outcome of one analysis call.
///
/// Replaces ambient loading/error/result flags with a value tests can assert
/// on directly. Callers hold `Idle` before the first request and `Loading`
/// while awaiting the AI service; each completed call produces `Ready` or
/// `Failed`, replacing any previous state wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisState<T> {
    /// No analysis requested yet
    Idle,
    /// Awaiting the AI service
    Loading,
    /// Analysis completed
    Ready(T),
    /// Analysis unavailable; the reason is generic by design
    Failed(String),
}

impl<T> AnalysisState<T> {
    /// Build a terminal state from the absence-signalling boundary result.
    #[must_use]
    pub fn from_outcome(outcome: Option<T>) -> Self {
        outcome.map_or_else(
            || Self::Failed("analysis unavailable".to_owned()),
            Self::Ready,
        )
    }

    /// True when the analysis completed successfully.
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// True when the analysis failed.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// The completed value, if any.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            Self::Idle | Self::Loading | Self::Failed(_) => None,
        }
    }
}

/// Run the full analysis pipeline on a raw AI response, producing an explicit
/// terminal state.
#[must_use]
pub fn analyze_response(raw_text: &str) -> AnalysisState<FoodAnalysis> {
    AnalysisState::from_outcome(parse_food_analysis(raw_text))
}
