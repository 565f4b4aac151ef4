//! Named filters: resolution from a filter name and the predicates behind them.
//!
//! A filter name resolves to exactly one [`Filter`] variant. Registry
//! conditions (`active`, `favorite`, `trashed`, `notebook`) come first, then
//! the predicate filters (`task`, `tag`, `search`). Anything else, including
//! an empty or missing name, resolves to [`Filter::None`], which callers treat
//! as a no-op.

use crate::core::condition::{self, Condition};
use crate::{Record, Result};
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

/// Call-time parameters of a filter invocation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterOptions {
    #[serde(default)]
    pub query: Option<String>,
}

impl FilterOptions {
    pub fn with_query(query: Option<String>) -> Self {
        Self { query }
    }

    /// Shorthand for options carrying `query`.
    pub fn query(query: impl Into<String>) -> Self {
        Self { query: Some(query.into()) }
    }
}

/// A resolved filter, carrying its typed parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Unknown or missing name.
    None,
    /// A registry condition, already resolved against the call-time options.
    Condition { name: String, condition: Condition },
    /// Notes with unfinished tasks.
    Task,
    /// Non-trashed notes carrying a tag. A missing tag matches nothing.
    Tag(Option<String>),
    /// Notes whose title or content matches the search text.
    Search(Option<String>),
}

impl Filter {
    /// Resolves `name` and `options` to a filter.
    ///
    /// ```rust
    /// use notedeck_core::{Filter, FilterOptions};
    ///
    /// assert_eq!(Filter::resolve(Some("task"), &FilterOptions::default()), Filter::Task);
    /// assert_eq!(Filter::resolve(Some("bogus"), &FilterOptions::default()), Filter::None);
    /// assert_eq!(Filter::resolve(None, &FilterOptions::default()), Filter::None);
    /// ```
    pub fn resolve(name: Option<&str>, options: &FilterOptions) -> Self {
        let Some(name) = name.filter(|n| !n.is_empty()) else {
            return Self::None;
        };

        if let Some(entry) = condition::conditions(name) {
            return Self::Condition {
                name: name.to_string(),
                condition: entry.resolve(options),
            };
        }

        match name {
            "task" => Self::Task,
            "tag" => Self::Tag(options.query.clone()),
            "search" => Self::Search(options.query.clone()),
            _ => Self::None,
        }
    }

    /// Short name used in logs; `None` for [`Filter::None`].
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Condition { name, .. } => Some(name),
            Self::Task => Some("task"),
            Self::Tag(_) => Some("tag"),
            Self::Search(_) => Some("search"),
        }
    }

    /// Applies the filter to `records`.
    ///
    /// Returns the indices of matching records in their original order, or
    /// `Ok(None)` when the filter selects everything without testing records
    /// ([`Filter::None`] and empty search text).
    ///
    /// # Errors
    ///
    /// Returns [`crate::NotedeckError::InvalidPattern`] if the search text
    /// does not compile.
    pub fn apply<R: Record>(&self, records: &[R]) -> Result<Option<Vec<usize>>> {
        let selected = match self {
            Self::None => return Ok(None),
            Self::Condition { condition, .. } => select(records, |r| condition.matches(r)),
            Self::Task => select(records, |r| task_filter(r)),
            Self::Tag(tag) => match tag {
                Some(tag) => select(records, |r| tag_filter(r, tag)),
                None => Vec::new(),
            },
            Self::Search(text) => match SearchPattern::new(text.as_deref())? {
                Some(pattern) => select(records, |r| pattern.is_match(r)),
                None => return Ok(None),
            },
        };
        Ok(Some(selected))
    }
}

fn select<R: Record>(records: &[R], predicate: impl Fn(&R) -> bool) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| predicate(r))
        .map(|(i, _)| i)
        .collect()
}

/// `true` if the record has fewer completed tasks than tasks overall.
pub fn task_filter<R: Record + ?Sized>(record: &R) -> bool {
    record.integer("taskCompleted") < record.integer("taskAll")
}

/// `true` if the record is not trashed and `tag` is one of its tags (exact match).
pub fn tag_filter<R: Record + ?Sized>(record: &R, tag: &str) -> bool {
    record.tags().iter().any(|t| t == tag) && record.integer("trash") == 0
}

/// Compiled search text: a case-insensitive, multi-line, unanchored pattern.
///
/// Matching holds no state between records, so the same pattern can be
/// tested against any number of records in any order.
#[derive(Debug, Clone)]
pub struct SearchPattern {
    regex: Regex,
}

impl SearchPattern {
    /// Compiles `text`; empty or missing text yields `Ok(None)` (no filtering).
    ///
    /// `text` uses the syntax of the [`regex`] crate. Constructs that crate
    /// does not support, such as look-around (`(?=...)`, `(?!...)`) and
    /// backreferences (`\1`), are rejected rather than matched.
    ///
    /// # Errors
    ///
    /// Returns [`crate::NotedeckError::InvalidPattern`] if `text` is not a
    /// valid regular expression, including the unsupported constructs above.
    pub fn new(text: Option<&str>) -> Result<Option<Self>> {
        let Some(text) = text.filter(|t| !t.is_empty()) else {
            return Ok(None);
        };
        let regex = RegexBuilder::new(text)
            .case_insensitive(true)
            .multi_line(true)
            .build()?;
        Ok(Some(Self { regex }))
    }

    /// `true` if the pattern occurs anywhere in the title or the content.
    pub fn is_match<R: Record + ?Sized>(&self, record: &R) -> bool {
        self.regex.is_match(&record.text("title")) || self.regex.is_match(&record.text("content"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NotedeckError, Note};

    fn note(title: &str, content: &str) -> Note {
        let mut n = Note::new(title, title);
        n.content = content.to_string();
        n
    }

    fn tasks(all: i64, completed: i64) -> Note {
        let mut n = Note::new("t", "t");
        n.task_all = all;
        n.task_completed = completed;
        n
    }

    #[test]
    fn test_task_filter_compares_counts_only() {
        assert!(task_filter(&tasks(3, 1)));
        assert!(!task_filter(&tasks(0, 0)));
        assert!(!task_filter(&tasks(2, 2)));
        let mut trashed = tasks(3, 1);
        trashed.trash = 1;
        assert!(task_filter(&trashed));
    }

    #[test]
    fn test_tag_filter_exact_membership_and_not_trashed() {
        let mut n = note("a", "");
        n.tags = vec!["rust".into(), "design".into()];
        assert!(tag_filter(&n, "rust"));
        assert!(!tag_filter(&n, "rus"));
        assert!(!tag_filter(&n, "Rust"));

        n.trash = 1;
        assert!(!tag_filter(&n, "rust"));

        assert!(!tag_filter(&note("untagged", ""), "rust"));
    }

    #[test]
    fn test_search_empty_text_is_identity() {
        assert!(SearchPattern::new(None).unwrap().is_none());
        assert!(SearchPattern::new(Some("")).unwrap().is_none());
        let records = vec![note("a", ""), note("b", "")];
        assert_eq!(Filter::Search(Some(String::new())).apply(&records).unwrap(), None);
    }

    #[test]
    fn test_search_case_insensitive_in_title_or_content() {
        let pattern = SearchPattern::new(Some("shop")).unwrap().unwrap();
        assert!(pattern.is_match(&note("Shopping List", "")));
        assert!(pattern.is_match(&note("Errands", "go to the SHOP")));
        assert!(!pattern.is_match(&note("Trip Plan", "pack bags")));
    }

    #[test]
    fn test_search_multiline_anchors() {
        let pattern = SearchPattern::new(Some("^milk$")).unwrap().unwrap();
        assert!(pattern.is_match(&note("Groceries", "eggs\nmilk\nbread")));
    }

    #[test]
    fn test_search_has_no_state_between_records() {
        let records: Vec<Note> = (0..5).map(|i| note(&format!("shop {i}"), "")).collect();
        let filter = Filter::Search(Some("shop".into()));
        let first = filter.apply(&records).unwrap();
        let second = filter.apply(&records).unwrap();
        assert_eq!(first, Some(vec![0, 1, 2, 3, 4]));
        assert_eq!(first, second);
    }

    #[test]
    fn test_search_no_match_is_empty_not_identity() {
        let records = vec![note("Shopping List", "")];
        let result = Filter::Search(Some("ZZZ".into())).apply(&records).unwrap();
        assert_eq!(result, Some(vec![]));
    }

    #[test]
    fn test_invalid_pattern_propagates() {
        let records = vec![note("a", "")];
        let err = Filter::Search(Some("(unclosed".into())).apply(&records).unwrap_err();
        assert!(matches!(err, NotedeckError::InvalidPattern(_)));
    }

    #[test]
    fn test_lookaround_and_backreferences_are_rejected() {
        for text in ["shop(?=ping)", "(a)\\1"] {
            assert!(matches!(
                SearchPattern::new(Some(text)),
                Err(NotedeckError::InvalidPattern(_))
            ));
        }
    }

    #[test]
    fn test_resolve_conditions_and_predicates() {
        let opts = FilterOptions::query("nb1");
        assert!(matches!(
            Filter::resolve(Some("notebook"), &opts),
            Filter::Condition { ref name, .. } if name == "notebook"
        ));
        assert_eq!(Filter::resolve(Some("tag"), &opts), Filter::Tag(Some("nb1".into())));
        assert_eq!(Filter::resolve(Some("search"), &opts), Filter::Search(Some("nb1".into())));
        assert_eq!(Filter::resolve(Some(""), &opts), Filter::None);
        assert_eq!(Filter::resolve(Some("fuzzy"), &opts), Filter::None);
    }

    #[test]
    fn test_tag_without_query_matches_nothing() {
        let mut n = note("a", "");
        n.tags = vec!["rust".into()];
        assert_eq!(Filter::Tag(None).apply(&[n]).unwrap(), Some(vec![]));
    }
}
