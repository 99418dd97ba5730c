// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::fuzzy_score::{fold_case, fuzzy_score};

/// Runes that end a word for completion purposes. Whitespace is handled separately.
pub const WORD_BREAK_CHARS: &str = "\"'`@$><;|&{}()[],.:";

#[must_use]
pub fn is_word_break(rune: char) -> bool {
    rune.is_whitespace() || WORD_BREAK_CHARS.contains(rune)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// The candidate starts with the typed word (ignoring case).
    Prefix,
    /// The typed word is only an ordered subsequence of the candidate.
    Fuzzy,
}

/// One ranked candidate. Borrowed from the [`SuggestionEngine`], recomputed on every
/// keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMatch<'a> {
    pub text: &'a str,
    pub score: i32,
    pub kind: MatchKind,
}

/// Holds the configured candidates and ranks them against the word being typed.
///
/// Ranking: every prefix match comes before every fuzzy-only match. Prefix matches keep
/// their configured order, since the typed word always matches them as one run from
/// position 0 and they only differ in length. Fuzzy-only matches are ordered by
/// descending [`fuzzy_score`], ties keep configured order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionEngine {
    suggestions: Vec<String>,
}

impl SuggestionEngine {
    #[must_use]
    pub fn new(suggestions: Vec<String>) -> Self { Self { suggestions } }

    #[must_use]
    pub fn suggestions(&self) -> &[String] { &self.suggestions }

    pub fn set_suggestions(&mut self, suggestions: Vec<String>) {
        self.suggestions = suggestions;
    }

    /// The runes after the last word break in `buffer`.
    #[must_use]
    pub fn trailing_word(buffer: &[char]) -> &[char] {
        let start = buffer
            .iter()
            .rposition(|&rune| is_word_break(rune))
            .map_or(0, |index| index + 1);
        &buffer[start..]
    }

    /// Rank the configured suggestions against the trailing word of `buffer`. Empty when
    /// the trailing word is empty.
    #[must_use]
    pub fn get_matches(&self, buffer: &[char]) -> Vec<ScoredMatch<'_>> {
        let word = Self::trailing_word(buffer);
        if word.is_empty() {
            return Vec::new();
        }
        let pattern: String = word.iter().collect();

        let mut prefix_matches = Vec::new();
        let mut fuzzy_matches = Vec::new();

        for candidate in &self.suggestions {
            let Some(score) = fuzzy_score(&pattern, candidate) else {
                continue;
            };
            if starts_with_ignore_case(candidate, word) {
                prefix_matches.push(ScoredMatch {
                    text: candidate,
                    score,
                    kind: MatchKind::Prefix,
                });
            } else {
                fuzzy_matches.push(ScoredMatch {
                    text: candidate,
                    score,
                    kind: MatchKind::Fuzzy,
                });
            }
        }

        // `sort_by` is stable.
        fuzzy_matches.sort_by(|lhs, rhs| rhs.score.cmp(&lhs.score));

        prefix_matches.extend(fuzzy_matches);
        prefix_matches
    }

    /// The match selected by `match_index` (taken modulo the number of matches).
    #[must_use]
    pub fn selected_match(&self, buffer: &[char], match_index: usize) -> Option<&str> {
        let matches = self.get_matches(buffer);
        if matches.is_empty() {
            return None;
        }
        Some(matches[match_index % matches.len()].text)
    }

    /// Runes of the selected match beyond the typed word's length. Empty unless `cursor`
    /// is at the end of `buffer`.
    #[must_use]
    pub fn find_ghost(&self, buffer: &[char], cursor: usize, match_index: usize) -> String {
        if cursor != buffer.len() {
            return String::new();
        }
        let typed_len = Self::trailing_word(buffer).len();
        self.selected_match(buffer, match_index)
            .map(|text| text.chars().skip(typed_len).collect())
            .unwrap_or_default()
    }
}

fn starts_with_ignore_case(candidate: &str, word: &[char]) -> bool {
    let mut candidate_runes = candidate.chars();
    word.iter().all(|&wanted| {
        candidate_runes
            .next()
            .is_some_and(|rune| fold_case(rune) == fold_case(wanted))
    })
}
