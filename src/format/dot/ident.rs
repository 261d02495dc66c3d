// SPDX-FileCopyrightText: 2026 Kinmap contributors
// SPDX-License-Identifier: LicenseRef-Kinmap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kinmap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Cow;

const KEYWORDS: [&str; 6] = ["node", "edge", "graph", "digraph", "subgraph", "strict"];

fn is_plain_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_ascii_alphabetic() || first == '_') {
        return false;
    }
    if !chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_') {
        return false;
    }
    !KEYWORDS
        .iter()
        .any(|keyword| keyword.eq_ignore_ascii_case(value))
}

fn is_numeral(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|ch| ch.is_ascii_digit())
}

/// Renders `value` as a DOT id, quoting and escaping only when needed.
pub(super) fn format_id(value: &str) -> Cow<'_, str> {
    if is_plain_identifier(value) || is_numeral(value) {
        return Cow::Borrowed(value);
    }

    let mut out = String::with_capacity(value.len().saturating_add(2));
    out.push('"');
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(ch),
        }
    }
    out.push('"');
    Cow::Owned(out)
}

pub(super) fn is_bare_id_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == '.'
}

#[cfg(test)]
mod tests {
    use super::format_id;

    #[test]
    fn plain_identifiers_and_numerals_stay_bare() {
        assert_eq!(format_id("Alice"), "Alice");
        assert_eq!(format_id("_x1"), "_x1");
        assert_eq!(format_id("1984"), "1984");
    }

    #[test]
    fn keywords_spaces_and_punctuation_are_quoted() {
        assert_eq!(format_id("graph"), "\"graph\"");
        assert_eq!(format_id("Node"), "\"Node\"");
        assert_eq!(format_id("Mary Ann"), "\"Mary Ann\"");
        assert_eq!(format_id("O'Neil"), "\"O'Neil\"");
    }

    #[test]
    fn quotes_backslashes_and_newlines_are_escaped() {
        assert_eq!(format_id("say \"hi\""), "\"say \\\"hi\\\"\"");
        assert_eq!(format_id("a\\b"), "\"a\\\\b\"");
        assert_eq!(format_id("School\n(Institution)"), "\"School\\n(Institution)\"");
    }

    #[test]
    fn carriage_returns_are_escaped_not_dropped() {
        assert_eq!(format_id("Fr\riend"), "\"Fr\\riend\"");
    }
}
