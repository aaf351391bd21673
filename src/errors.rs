// ABOUTME: Unified error handling re-exported from recipe-core
// ABOUTME: Keeps `crate::errors::AppError` paths stable across the server crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! The error types live in `recipe-core` so that they can be shared with other
//! workspace crates; this module re-exports them for the server crate.

pub use recipe_core::errors::*;
