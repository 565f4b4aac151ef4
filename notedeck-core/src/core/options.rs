//! Collection configuration accepted at construction time.

use crate::{NotedeckError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Field the collection sorts by when none is configured.
pub const DEFAULT_SORT_FIELD: &str = "created";

/// Page size used when none is configured.
pub const DEFAULT_PER_PAGE: usize = 10;

/// Direction of a single sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl FromStr for SortDirection {
    type Err = NotedeckError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(NotedeckError::InvalidSortDirection(other.to_string())),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options a collection is constructed with.
///
/// Every field is optional; the accessors apply the defaults
/// (`created`, `desc`, 10 per page). Options are read-only once the
/// collection owns them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionOptions {
    #[serde(default)]
    pub sort_field: Option<String>,
    #[serde(default)]
    pub sort_direction: Option<SortDirection>,
    #[serde(default)]
    pub per_page: Option<usize>,
}

impl CollectionOptions {
    /// Parses options from their JSON form, e.g. `{"sortField":"title","sortDirection":"asc"}`.
    ///
    /// # Errors
    ///
    /// Returns [`NotedeckError::Json`] if the text is not valid JSON or a
    /// direction other than `asc`/`desc` is given.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn sort_field(&self) -> &str {
        self.sort_field
            .as_deref()
            .filter(|f| !f.is_empty())
            .unwrap_or(DEFAULT_SORT_FIELD)
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction.unwrap_or(SortDirection::Desc)
    }

    /// Page size; zero is treated as unset.
    pub fn per_page(&self) -> usize {
        self.per_page.filter(|n| *n > 0).unwrap_or(DEFAULT_PER_PAGE)
    }
}
