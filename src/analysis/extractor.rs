// ABOUTME: Locates the JSON payload embedded in free-form AI response text
// ABOUTME: Fenced block first, then outermost brace span, then the text verbatim
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealscope contributors

//! Response extraction.
//!
//! AI models wrap their JSON answer in prose, markdown fences, or nothing at
//! all. [`extract_json_candidate`] picks the most likely JSON substring without
//! ever failing: an undecodable candidate simply fails to decode downstream,
//! and that decode failure is the caller's signal.

use tracing::debug;

/// Locate the JSON candidate inside arbitrary response text.
///
/// Search order:
///
/// 1. the first fenced code block explicitly (` ```json `) or implicitly
///    (bare fence whose body starts with `{`) marked as JSON;
/// 2. the first outermost brace span;
/// 3. the full text verbatim.
#[must_use]
pub fn extract_json_candidate(raw: &str) -> &str {
    if let Some(body) = find_fenced_json(raw) {
        debug!(len = body.len(), "extracted fenced JSON block");
        return body;
    }

    if let (Some(start), Some(end)) = (raw.find('{'), raw.rfind('}')) {
        if start < end {
            debug!(start, end, "extracted brace-delimited span");
            return &raw[start..=end];
        }
    }

    raw
}

/// Find the first fenced block carrying JSON.
///
/// A block is JSON-marked explicitly when its info string is `json`
/// (case-insensitive), or implicitly when the info string is empty and the
/// body starts with `{`. Prose fences fall through to the brace scan. An
/// unterminated fence runs to the end of the text.
fn find_fenced_json(raw: &str) -> Option<&str> {
    let mut rest = raw;
    while let Some(open) = rest.find("```") {
        let after = &rest[open + 3..];
        let info_end = after.find('\n')?;
        let info = after[..info_end].trim();
        let body = &after[info_end + 1..];
        let body_end = body.find("```").unwrap_or(body.len());
        let body_text = body[..body_end].trim();

        if info.eq_ignore_ascii_case("json")
            || (info.is_empty() && body_text.starts_with('{'))
        {
            return Some(body_text);
        }

        rest = body.get(body_end + 3..).unwrap_or("");
    }
    None
}
