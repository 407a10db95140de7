// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Filename sanitization for model responses

use regex::Regex;
use std::sync::OnceLock;

fn disallowed() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-zA-Z0-9_]").expect("static pattern"))
}

/// Turn free text into a filename token made of `[a-z0-9_]` only.
///
/// Spaces and hyphens become underscores, everything else outside
/// `[A-Za-z0-9_]` is dropped and the result is lowercased.
pub fn sanitize(raw: &str) -> String {
    let name = raw.trim().replace([' ', '-'], "_");
    disallowed().replace_all(&name, "").to_lowercase()
}

/// Keep only the text before the first whitespace character
pub fn first_word(name: &str) -> &str {
    name.split(char::is_whitespace).next().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_token(s: &str) -> bool {
        s.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
    }

    #[test]
    fn test_sentence_becomes_snake_case() {
        assert_eq!(sanitize("Red Apple on Table"), "red_apple_on_table");
    }

    #[test]
    fn test_hyphen_and_punctuation() {
        assert_eq!(sanitize("cat-sitting!!"), "cat_sitting");
        assert_eq!(sanitize("\"dog_running.\""), "dog_running");
    }

    #[test]
    fn test_response_is_trimmed() {
        assert_eq!(sanitize("  sunset_beach\n"), "sunset_beach");
    }

    #[test]
    fn test_non_ascii_is_stripped() {
        assert_eq!(sanitize("Café Crème"), "caf_crme");
        assert_eq!(sanitize("日本"), "");
    }

    #[test]
    fn test_output_alphabet_and_idempotence() {
        let samples = [
            "",
            "   ",
            "Red Apple on Table",
            "cat-sitting!!",
            "Tabs\tand\nnewlines inside",
            "MiXeD-Case 123 ### ok",
            "émoji 🐱 cat",
            "__already_clean__",
            "a - b - c",
        ];

        for raw in samples {
            let once = sanitize(raw);
            assert!(is_token(&once), "{:?} produced {:?}", raw, once);
            assert_eq!(sanitize(&once), once, "not idempotent for {:?}", raw);
        }
    }

    #[test]
    fn test_first_word() {
        assert_eq!(first_word("beach_sunset extra_words"), "beach_sunset");
        assert_eq!(first_word("single"), "single");
        assert_eq!(first_word("tab\tseparated"), "tab");
        assert_eq!(first_word(""), "");
        assert_eq!(first_word(" leading"), "");
    }
}
