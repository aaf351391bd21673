// ABOUTME: Cookie helpers for reading the session cookie and building Set-Cookie values
// ABOUTME: Session cookies are HttpOnly, SameSite=Lax, and optionally Secure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use axum::http::header::COOKIE;
use axum::http::HeaderMap;

/// Read a cookie value from every `Cookie` header on the request
#[must_use]
pub fn get_cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|header| header.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

/// Build a browser-session cookie (no Max-Age, so it ends with the browser session)
#[must_use]
pub fn session_cookie(name: &str, value: &str, secure: bool) -> String {
    let mut cookie = format!("{name}={value}; HttpOnly; SameSite=Lax; Path=/");
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}
