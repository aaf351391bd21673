// ABOUTME: Utility module for shared helpers used across routes and clients
// ABOUTME: HTML escaping and HTTP client construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// HTML escaping for server-rendered pages
pub mod html;
/// Outbound HTTP client construction
pub mod http_client;
