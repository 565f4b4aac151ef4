//! Approximate title matching.

use crate::Record;
use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};
use strsim::normalized_damerau_levenshtein;

/// Field fuzzy search scores against.
pub const FUZZY_FIELD: &str = "title";

/// Lowest per-word similarity (0..=1) a misspelt word may have to a title word.
pub const MIN_WORD_SIMILARITY: f64 = 0.75;

/// How well a title matched. Subsequence matches always outrank typo matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FuzzyScore {
    /// Every word is within the edit-distance bound of some title word;
    /// carries the mean similarity scaled to 0..=1000.
    Typo(u32),
    /// Every word is a fuzzy subsequence of the title; carries the matcher score.
    Subsequence(u32),
}

/// Fuzzy title matcher built from one search text.
///
/// The text is split on whitespace. A title matches when every word is a
/// case-insensitive fuzzy subsequence of it, or failing that, when every word
/// is contained in or close by Damerau-Levenshtein distance to one of the
/// title's words, so transposed or mistyped letters still find the note.
/// There is no score cutoff beyond that.
pub struct FuzzySearcher {
    pattern: Pattern,
    matcher: Matcher,
    words: Vec<String>,
}

impl FuzzySearcher {
    /// Builds a searcher for `text`. Returns `None` when `text` has no words.
    pub fn new(text: &str) -> Option<Self> {
        let words: Vec<String> = text.split_whitespace().map(str::to_lowercase).collect();
        if words.is_empty() {
            return None;
        }
        Some(Self {
            pattern: Pattern::new(text, CaseMatching::Ignore, Normalization::Smart, AtomKind::Fuzzy),
            matcher: Matcher::new(Config::DEFAULT),
            words,
        })
    }

    /// Scores a single title; `None` if it does not match.
    pub fn score(&mut self, title: &str) -> Option<FuzzyScore> {
        let mut buf = Vec::new();
        if let Some(score) = self.pattern.score(Utf32Str::new(title, &mut buf), &mut self.matcher) {
            return Some(FuzzyScore::Subsequence(score));
        }
        self.typo_score(title)
    }

    fn typo_score(&self, title: &str) -> Option<FuzzyScore> {
        let title = title.to_lowercase();
        let title_words: Vec<&str> = title
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .collect();

        let mut total = 0.0;
        for word in &self.words {
            let best = title_words
                .iter()
                .map(|tw| {
                    if tw.contains(word.as_str()) {
                        1.0
                    } else {
                        normalized_damerau_levenshtein(word, tw)
                    }
                })
                .fold(0.0, f64::max);
            if best < MIN_WORD_SIMILARITY {
                return None;
            }
            total += best;
        }
        let mean = total / self.words.len() as f64;
        Some(FuzzyScore::Typo((mean * 1000.0).round() as u32))
    }

    /// Returns the matching records with their scores, best first.
    ///
    /// Equal scores keep the order of `records`.
    pub fn rank<'a, R: Record>(&mut self, records: &'a [R]) -> Vec<(&'a R, FuzzyScore)> {
        let mut matches: Vec<(&R, FuzzyScore)> = records
            .iter()
            .filter_map(|r| self.score(&r.text(FUZZY_FIELD)).map(|s| (r, s)))
            .collect();
        matches.sort_by(|a, b| b.1.cmp(&a.1));
        matches
    }
}
