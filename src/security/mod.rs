// ABOUTME: Security helpers for session cookies and CSRF tokens
// ABOUTME: Cookie parsing/formatting and constant-time token generation and comparison
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Session cookie parsing and `Set-Cookie` formatting
pub mod cookies;
/// CSRF token generation and comparison
pub mod csrf;
