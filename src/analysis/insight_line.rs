// ABOUTME: Splits a freeform insight line into a pictographic marker and content
// ABOUTME: Grapheme-aware matching; base + variation selector is one atomic marker
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealscope contributors

//! Insight line parsing.
//!
//! Health insight lines from the AI model conventionally lead with an emoji
//! marker ("🧠 Adapt daily"). [`InsightLine`] splits the marker from the
//! content so the presentation layer can style them separately. The value is
//! transient: recomputed per render, never persisted.
//!
//! Matching is range-based over Unicode properties rather than raw codepoint
//! slicing, so a base character plus trailing variation selector stays one
//! atomic marker.

use std::sync::OnceLock;

use regex::Regex;

/// Marker substituted when a line carries no recognizable leading glyph.
const DEFAULT_MARKER: &str = "✨";

/// Marker glyphs the range pattern cannot reach: keycap sequences lead with a
/// plain digit, `#`, or `*` and only become pictographic via the combining
/// enclosing keycap.
const FALLBACK_MARKERS: [&str; 12] = [
    "1️⃣", "2️⃣", "3️⃣", "4️⃣", "5️⃣", "6️⃣", "7️⃣", "8️⃣", "9️⃣", "🔟", "#️⃣", "*️⃣",
];

/// One parsed insight line: a leading pictographic marker plus trailing
/// content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightLine {
    /// The leading marker glyph, or `"✨"` when none was found
    pub emoji: String,
    /// Trimmed trailing text, possibly empty
    pub content: String,
}

impl InsightLine {
    /// Split one line of text into marker and content.
    ///
    /// A leading pictographic grapheme cluster (one base character from the
    /// Extended_Pictographic / Emoji_Presentation ranges, optionally followed
    /// by a variation selector, optionally followed by whitespace) becomes the
    /// marker. Keycap sequences are matched from a fixed fallback set. When
    /// both fail, the marker defaults to `"✨"` and the whole trimmed line is
    /// content.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();

        if let Some(captures) = marker_regex().and_then(|re| re.captures(trimmed)) {
            return Self {
                emoji: captures
                    .get(1)
                    .map_or(DEFAULT_MARKER, |m| m.as_str())
                    .to_owned(),
                content: captures
                    .get(2)
                    .map_or("", |m| m.as_str())
                    .trim()
                    .to_owned(),
            };
        }

        for marker in FALLBACK_MARKERS {
            if let Some(rest) = trimmed.strip_prefix(marker) {
                return Self {
                    emoji: marker.to_owned(),
                    content: rest.trim().to_owned(),
                };
            }
        }

        Self {
            emoji: DEFAULT_MARKER.to_owned(),
            content: trimmed.to_owned(),
        }
    }
}

/// Get the compiled marker regex (cached).
///
/// Returns None if regex compilation fails (should never happen with a
/// hardcoded pattern).
fn marker_regex() -> Option<&'static Regex> {
    static MARKER_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    MARKER_REGEX
        .get_or_init(|| {
            // One pictographic base, optional variation selector, optional
            // whitespace, rest is content.
            Regex::new(
                r"^([\p{Extended_Pictographic}\p{Emoji_Presentation}][\x{FE00}-\x{FE0F}]?)\s*(.*)$",
            )
            .ok()
        })
        .as_ref()
}
