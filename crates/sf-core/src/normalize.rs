//! Text normalization for stored query bodies
//!
//! Comments are removed in place (their newlines stay, so line structure is
//! unchanged) and the trailing statement terminator is dropped. Nothing else
//! is touched: no re-indentation, no leading trim.

use crate::lexer::{Lexer, Token};

/// Normalize a raw query body for storage and CTE composition.
///
/// # Examples
/// ```
/// use sf_core::normalize::normalize;
/// assert_eq!(
///     normalize("SELECT * FROM t\nWHERE x > 0; --keep positives\n"),
///     "SELECT * FROM t\nWHERE x > 0"
/// );
/// ```
pub fn normalize(sql: &str) -> String {
    let stripped = strip_comments(sql);
    strip_trailing_terminator(&stripped).to_string()
}

/// Remove `--` line comments and `/* */` block comments.
///
/// Line comments are removed up to the newline, which is kept. Block comments
/// are removed as a unit. A comment wedged between two non-whitespace
/// characters leaves a single space, so `x/*c*/FROM` stays two tokens and
/// `1 -/*c*/-1` never turns into a line comment. Comment markers inside
/// string literals and quoted identifiers are left alone.
pub fn strip_comments(sql: &str) -> String {
    let tokens: Vec<Token<'_>> = Lexer::new(sql).collect();
    let mut out = String::with_capacity(sql.len());

    for (i, token) in tokens.iter().enumerate() {
        if !token.is_comment() {
            out.push_str(token.text);
            continue;
        }
        let before = out.chars().next_back();
        let after = tokens[i + 1..]
            .iter()
            .find(|t| !t.is_comment())
            .and_then(|t| t.text.chars().next());
        if let (Some(before), Some(after)) = (before, after) {
            if !before.is_whitespace() && !after.is_whitespace() {
                out.push(' ');
            }
        }
    }
    out
}

/// Drop trailing whitespace and the trailing `;` terminator (repeated
/// terminators included). Internal terminators are preserved.
pub fn strip_trailing_terminator(sql: &str) -> &str {
    let mut trimmed = sql.trim_end();
    while let Some(rest) = trimmed.strip_suffix(';') {
        trimmed = rest.trim_end();
    }
    trimmed
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
