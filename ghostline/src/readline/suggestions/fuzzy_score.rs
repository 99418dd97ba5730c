// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Subsequence ("fuzzy") scoring of a typed pattern against a candidate string.
//!
//! The text is scanned left to right, consuming pattern runes in order, ignoring case.
//! If any pattern rune is left over the candidate doesn't match at all. Otherwise the
//! score is the sum of:
//!
//! | Term                                                         | Points            |
//! |--------------------------------------------------------------|-------------------|
//! | first matched rune is at text position 0                     | `+10`             |
//! | matched rune continues an unbroken run (n-th rune after the first) | `+5 × n`    |
//! | matched rune directly follows a separator (space, `-`, `_`)  | `+8`              |
//! | unmatched runes skipped since the previous match             | `-1` each         |
//! | length bonus (shorter candidates score higher)               | `50 - len(text)`  |

/// Bonus when the first matched rune is the first rune of the text.
pub const FUZZY_START_BONUS: i32 = 10;

/// Multiplied by the length of the consecutive run so far.
pub const FUZZY_RUN_BONUS: i32 = 5;

/// Bonus when a matched rune follows a separator.
pub const FUZZY_SEPARATOR_BONUS: i32 = 8;

/// `FUZZY_LENGTH_BASE - len(text)` is added to every match.
pub const FUZZY_LENGTH_BASE: i32 = 50;

fn is_separator(rune: char) -> bool { matches!(rune, ' ' | '-' | '_') }

/// Simple one-to-one case fold, so that rune positions in the folded text line up with
/// the original.
pub(crate) fn fold_case(rune: char) -> char { rune.to_lowercase().next().unwrap_or(rune) }

/// Score `pattern` as a case-insensitive subsequence of `text`.
///
/// Returns [`None`] when `pattern` is not a subsequence of `text`. Note that a match can
/// score below zero (long candidates, big gaps), which is why "no match" is not encoded
/// as a negative number.
///
/// ```
/// use r3bl_ghostline::fuzzy_score;
///
/// assert_eq!(fuzzy_score("xyz", "hello"), None);
/// assert!(fuzzy_score("hel", "hello") > fuzzy_score("hlo", "hello"));
/// ```
#[must_use]
pub fn fuzzy_score(pattern: &str, text: &str) -> Option<i32> {
    let pattern: Vec<char> = pattern.chars().map(fold_case).collect();
    let text: Vec<char> = text.chars().collect();

    let mut score: i32 = 0;
    let mut pattern_index = 0;
    let mut last_match: Option<usize> = None;
    let mut run_length: i32 = 0;

    for (index, &rune) in text.iter().enumerate() {
        let Some(&wanted) = pattern.get(pattern_index) else {
            break;
        };
        if fold_case(rune) != wanted {
            continue;
        }

        match last_match {
            None => {
                if index == 0 {
                    score += FUZZY_START_BONUS;
                }
            }
            Some(prev) if prev + 1 == index => {
                run_length += 1;
                score += FUZZY_RUN_BONUS * run_length;
            }
            Some(prev) => {
                run_length = 0;
                score -= to_i32(index - prev - 1);
            }
        }

        if index > 0 && is_separator(text[index - 1]) {
            score += FUZZY_SEPARATOR_BONUS;
        }

        last_match = Some(index);
        pattern_index += 1;
    }

    if pattern_index < pattern.len() {
        return None;
    }

    Some(score + FUZZY_LENGTH_BASE - to_i32(text.len()))
}

fn to_i32(value: usize) -> i32 { i32::try_from(value).unwrap_or(i32::MAX) }

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_no_match_is_none() {
        assert_eq!(fuzzy_score("xyz", "hello"), None);
        assert_eq!(fuzzy_score("hellooo", "hello"), None);
        assert_eq!(fuzzy_score("olh", "hello"), None);
    }

    #[test]
    fn test_consecutive_run_beats_gaps() {
        assert!(fuzzy_score("hel", "hello") > fuzzy_score("hlo", "hello"));
    }

    #[test]
    fn test_shorter_text_scores_higher() {
        assert!(fuzzy_score("git", "git") > fuzzy_score("git", "git checkout branch"));
    }

    // h@0: +10, e: +5, l: +10, length: 50 - 5.
    #[test_case("hel", "hello", 70)]
    // h@0: +10, l@2: gap 1, o@4: gap 1, length: 50 - 5.
    #[test_case("hlo", "hello", 53)]
    // g@0: +10, i: +5, t: +10, length: 50 - 3.
    #[test_case("git", "git", 72)]
    // c@4 follows a space: +8, o@9: gap 4, length: 50 - 12.
    #[test_case("co", "git checkout", 42)]
    // s@4 follows '-': +8, no start bonus, length 50 - 9.
    #[test_case("s", "foo-slash", 49)]
    // Empty pattern matches anything, only the length term applies.
    #[test_case("", "abc", 47)]
    fn test_exact_scores(pattern: &str, text: &str, expected: i32) {
        assert_eq!(fuzzy_score(pattern, text), Some(expected));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(fuzzy_score("HEL", "hello"), fuzzy_score("hel", "HELLO"));
        assert!(fuzzy_score("HEL", "hello").is_some());
    }

    #[test]
    fn test_long_text_can_score_below_zero() {
        let text = "x".repeat(80) + "a";
        let score = fuzzy_score("a", &text).unwrap();
        assert!(score < 0);
    }
}
