// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Loads server, database, provider, and session settings from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for Recipe Book
//!
//! Configuration is environment-only: every setting comes from an environment
//! variable with a documented default, except the provider API key, which is
//! required.

/// Environment and server configuration
pub mod environment;

pub use environment::{DatabaseUrl, Environment, ServerConfig, SessionConfig};
