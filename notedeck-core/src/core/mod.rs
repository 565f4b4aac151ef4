//! Internal domain modules for the Notedeck core library.
//!
//! All public types from these modules are re-exported at the crate root
//! with `#[doc(inline)]`; import from there in preference to this module.

pub mod collection;
pub mod condition;
pub mod error;
pub mod filter;
pub mod fuzzy;
pub mod note;
pub mod options;
pub mod pagination;
pub mod sort;
pub mod source;

#[doc(inline)]
pub use collection::Collection;
#[doc(inline)]
pub use condition::{condition_names, conditions, Condition, ConditionEntry};
#[doc(inline)]
pub use error::{NotedeckError, Result};
#[doc(inline)]
pub use filter::{tag_filter, task_filter, Filter, FilterOptions, SearchPattern};
#[doc(inline)]
pub use fuzzy::{FuzzyScore, FuzzySearcher};
#[doc(inline)]
pub use note::{FieldValue, Note, Record};
#[doc(inline)]
pub use options::{CollectionOptions, SortDirection, DEFAULT_PER_PAGE, DEFAULT_SORT_FIELD};
#[doc(inline)]
pub use pagination::Pagination;
#[doc(inline)]
pub use sort::{compare, comparators, sort_records, SortKey, FAVORITE_FIELD};
#[doc(inline)]
pub use source::{JsonFileSource, RecordSource};
