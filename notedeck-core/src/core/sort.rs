//! Multi-key comparator derived from the collection options.

use crate::{CollectionOptions, Record, SortDirection};
use std::cmp::Ordering;

/// Field every comparator falls back to so favourites float up within ties.
pub const FAVORITE_FIELD: &str = "isFavorite";

/// One `(field, direction)` entry of a comparator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    pub field: String,
    pub direction: SortDirection,
}

impl SortKey {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self { field: field.into(), direction }
    }
}

/// Builds the ordered sort keys: the configured field, then `isFavorite desc`.
///
/// When the configured field is `isFavorite` itself the two entries collapse
/// into one: the tie-break direction replaces the configured one but the key
/// keeps its leading position.
///
/// ```rust
/// use notedeck_core::{comparators, CollectionOptions, SortDirection, SortKey};
///
/// let keys = comparators(&CollectionOptions::default());
/// assert_eq!(keys, vec![
///     SortKey::new("created", SortDirection::Desc),
///     SortKey::new("isFavorite", SortDirection::Desc),
/// ]);
/// ```
pub fn comparators(options: &CollectionOptions) -> Vec<SortKey> {
    let mut keys: Vec<SortKey> = Vec::with_capacity(2);
    for key in [
        SortKey::new(options.sort_field(), options.sort_direction()),
        SortKey::new(FAVORITE_FIELD, SortDirection::Desc),
    ] {
        match keys.iter_mut().find(|k| k.field == key.field) {
            Some(existing) => existing.direction = key.direction,
            None => keys.push(key),
        }
    }
    keys
}

/// Compares two records key by key; the first non-equal key decides.
pub fn compare<R: Record + ?Sized>(a: &R, b: &R, keys: &[SortKey]) -> Ordering {
    for key in keys {
        let ord = a.get(&key.field).total_cmp(&b.get(&key.field));
        let ord = match key.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
}

/// Stable-sorts `records` by `keys`; full ties keep their incoming order.
pub fn sort_records<R: Record>(records: &mut [&R], keys: &[SortKey]) {
    records.sort_by(|a, b| compare(*a, *b, keys));
}
