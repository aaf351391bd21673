// ABOUTME: HTML escaping utilities to prevent XSS in server-rendered templates
// ABOUTME: Provides text and attribute-safe escaping for values injected into HTML templates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::borrow::Cow;

/// Escape a string for insertion inside a quoted HTML attribute value
///
/// Covers both `"` and `'` so the value is safe whichever quote the template uses.
#[must_use]
pub fn escape_html_attribute(input: &str) -> Cow<'_, str> {
    html_escape::encode_quoted_attribute(input)
}

/// Escape a string for insertion as HTML text content
#[must_use]
pub fn escape_html_text(input: &str) -> Cow<'_, str> {
    html_escape::encode_text(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_attribute() {
        let escaped = escape_html_attribute(r#"x" onmouseover='alert(1)' <b>&"#);
        assert!(!escaped.contains('"'));
        assert!(!escaped.contains('\''));
        assert!(!escaped.contains('<'));
        assert!(escaped.contains("&quot;"));
        assert!(escaped.ends_with("&amp;"));
        assert_eq!(escape_html_attribute("plain"), "plain");
    }

    #[test]
    fn test_escape_html_text() {
        assert_eq!(escape_html_text("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html_text("Mac & Cheese"), "Mac &amp; Cheese");
    }
}
