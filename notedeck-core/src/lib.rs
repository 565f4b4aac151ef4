//! Core library for Notedeck — a filterable, sortable, paginated note collection.
//!
//! The primary entry point is [`Collection`], which owns a backing set of
//! [`Note`]s (or any other [`Record`]) and derives the visible view from it
//! through named filters, a multi-key comparator and page slicing. Fuzzy title
//! search is a separate read path over the whole backing set.
//!
//! Types are re-exported from their respective sub-modules for convenience;
//! consumers should import from the crate root rather than the `core` module.

pub mod core;

// Re-export commonly used types.
#[doc(inline)]
pub use core::{
    collection::Collection,
    condition::{condition_names, conditions, Condition, ConditionEntry},
    error::{NotedeckError, Result},
    filter::{tag_filter, task_filter, Filter, FilterOptions, SearchPattern},
    fuzzy::{FuzzyScore, FuzzySearcher},
    note::{FieldValue, Note, Record},
    options::{CollectionOptions, SortDirection, DEFAULT_PER_PAGE, DEFAULT_SORT_FIELD},
    pagination::Pagination,
    sort::{compare, comparators, sort_records, SortKey, FAVORITE_FIELD},
    source::{JsonFileSource, RecordSource},
};
