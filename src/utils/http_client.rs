// ABOUTME: Shared HTTP client construction with timeout configuration
// ABOUTME: Builds reqwest clients for outbound provider calls
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use reqwest::{Client, ClientBuilder};
use std::time::Duration;

/// Create a new HTTP client whose every request is bounded by `timeout`
///
/// The connect timeout is capped at the request timeout.
///
/// # Errors
///
/// Returns a configuration error if the client cannot be built, e.g. when the
/// TLS backend fails to initialize.
pub fn create_client_with_timeout(timeout: Duration) -> AppResult<Client> {
    ClientBuilder::new()
        .timeout(timeout)
        .connect_timeout(timeout.min(Duration::from_secs(5)))
        .user_agent(concat!("recipe-book/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| AppError::config(format!("Failed to build HTTP client: {e}")).with_source(e))
}
