//! Typo suggestions and human-readable name lists

use similar::TextDiff;

/// Default similarity cutoff for suggestions
pub const DEFAULT_CUTOFF: f32 = 0.6;

/// Default maximum number of suggestions
pub const DEFAULT_MAX_SUGGESTIONS: usize = 3;

/// Similarity of two names in `0.0..=1.0`, computed from the character-level
/// edit script between them (`2 * matches / total_len`).
pub fn similarity(a: &str, b: &str) -> f32 {
    TextDiff::from_chars(a, b).ratio()
}

/// Candidates at least `cutoff` similar to `word`, best first, at most `max`.
/// Exact matches are excluded since they are not typos.
pub fn close_matches<'a, I>(word: &str, candidates: I, max: usize, cutoff: f32) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut scored: Vec<(f32, &'a str)> = Vec::new();
    for candidate in candidates {
        if candidate == word || scored.iter().any(|(_, c)| *c == candidate) {
            continue;
        }
        let score = similarity(word, candidate);
        if score >= cutoff {
            scored.push((score, candidate));
        }
    }
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored.into_iter().take(max).map(|(_, c)| c).collect()
}

/// `Did you mean: 'a' or 'b'`, or `None` without matches
pub fn did_you_mean<S: AsRef<str>>(matches: &[S]) -> Option<String> {
    if matches.is_empty() {
        None
    } else {
        Some(format!("Did you mean: {}", quoted_list(matches, "or")))
    }
}

/// Quote each item and join them as an English list.
///
/// # Examples
/// ```
/// use sf_core::suggest::quoted_list;
/// assert_eq!(quoted_list(&["a"], "and"), "'a'");
/// assert_eq!(quoted_list(&["a", "b"], "or"), "'a' or 'b'");
/// assert_eq!(quoted_list(&["a", "b", "c"], "and"), "'a', 'b', and 'c'");
/// ```
pub fn quoted_list<S: AsRef<str>>(items: &[S], last_delimiter: &str) -> String {
    let quoted: Vec<String> = items.iter().map(|i| format!("'{}'", i.as_ref())).collect();
    match quoted.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} {last_delimiter} {second}"),
        [init @ .., last] => format!("{}, {last_delimiter} {last}", init.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typo_suggested() {
        let matches = close_matches(
            "author_subb",
            ["author_sub", "orders"],
            DEFAULT_MAX_SUGGESTIONS,
            DEFAULT_CUTOFF,
        );
        assert_eq!(matches, vec!["author_sub"]);
    }

    #[test]
    fn test_unrelated_names_not_suggested() {
        let matches = close_matches("zzz", ["author_sub", "orders"], 3, DEFAULT_CUTOFF);
        assert!(matches.is_empty());
    }

    #[test]
    fn test_best_match_first_and_capped() {
        let matches = close_matches("order", ["orders_archive", "orders", "order_x", "ordr"], 2, 0.6);
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0], "orders");
    }

    #[test]
    fn test_exact_match_excluded() {
        assert!(close_matches("orders", ["orders"], 3, 0.6).is_empty());
    }

    #[test]
    fn test_similarity_bounds() {
        assert_eq!(similarity("abc", "abc"), 1.0);
        assert_eq!(similarity("abc", "xyz"), 0.0);
    }

    #[test]
    fn test_did_you_mean() {
        assert_eq!(did_you_mean::<&str>(&[]), None);
        assert_eq!(
            did_you_mean(&["author_sub"]).as_deref(),
            Some("Did you mean: 'author_sub'")
        );
    }
}
