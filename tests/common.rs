// ABOUTME: Shared test helpers for integration suites
// ABOUTME: One-time tracing initialization so absence-path diagnostics are visible
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mealscope contributors

#![allow(dead_code)]

use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize tracing once for the whole test binary.
///
/// Failed analyses log their raw text at WARN; run with
/// `RUST_LOG=mealscope=debug` to see extraction-path decisions too.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("mealscope=warn")),
            )
            .with_test_writer()
            .try_init();
    });
}
