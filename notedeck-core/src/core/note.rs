//! Note records and the uniform attribute accessor the collection works through.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::cmp::Ordering;

/// A single attribute value read from a record.
///
/// The collection never touches record fields directly; every predicate and
/// comparator goes through [`Record::get`] and compares `FieldValue`s. Text
/// and list values borrow from the record where the record allows it, so
/// reading an attribute does not copy it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue<'a> {
    Null,
    Boolean(bool),
    Integer(i64),
    Number(f64),
    Text(Cow<'a, str>),
    List(Cow<'a, [String]>),
}

impl<'a> FieldValue<'a> {
    fn rank(&self) -> u8 {
        match self {
            Self::Null => 0,
            Self::Boolean(_) | Self::Integer(_) | Self::Number(_) => 1,
            Self::Text(_) => 2,
            Self::List(_) => 3,
        }
    }

    /// Total order used by the comparator.
    ///
    /// `Null` sorts first. Booleans, integers and floats compare numerically
    /// with each other (booleans as 0/1); values of unrelated kinds are
    /// ordered by kind.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Null, Self::Null) => Ordering::Equal,
            (Self::Integer(a), Self::Integer(b)) => a.cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::List(a), Self::List(b)) => a.cmp(b),
            _ => match (self.as_number(), other.as_number()) {
                (Some(a), Some(b)) => a.total_cmp(&b),
                _ => self.rank().cmp(&other.rank()),
            },
        }
    }

    /// Equality used by conditions: numeric kinds are compared by value, so
    /// `Boolean(false)`, `Integer(0)` and `Number(0.0)` are all equal.
    pub fn loose_eq(&self, other: &FieldValue<'_>) -> bool {
        match (self.as_number(), other.as_number()) {
            (Some(a), Some(b)) => a == b,
            _ => match (self, other) {
                (Self::Null, FieldValue::Null) => true,
                (Self::Text(a), FieldValue::Text(b)) => a == b,
                (Self::List(a), FieldValue::List(b)) => a == b,
                _ => false,
            },
        }
    }

    /// Returns the text content, or `None` for non-text values.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as an integer. Booleans map to 0/1; floats only
    /// convert when they hold a whole number.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            Self::Boolean(b) => Some(i64::from(*b)),
            Self::Number(n) if n.fract() == 0.0 => Some(*n as i64),
            _ => None,
        }
    }

    /// Returns the value as a float. Booleans map to 0/1.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Integer(n) => Some(*n as f64),
            Self::Number(n) => Some(*n),
            Self::Boolean(b) => Some(f64::from(u8::from(*b))),
            _ => None,
        }
    }

    /// Detaches the value from the record it was read from.
    pub fn into_owned(self) -> FieldValue<'static> {
        match self {
            Self::Null => FieldValue::Null,
            Self::Boolean(b) => FieldValue::Boolean(b),
            Self::Integer(n) => FieldValue::Integer(n),
            Self::Number(n) => FieldValue::Number(n),
            Self::Text(s) => FieldValue::Text(Cow::Owned(s.into_owned())),
            Self::List(l) => FieldValue::List(Cow::Owned(l.into_owned())),
        }
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(Cow::Borrowed(value))
    }
}

impl From<String> for FieldValue<'static> {
    fn from(value: String) -> Self {
        Self::Text(Cow::Owned(value))
    }
}

impl From<i64> for FieldValue<'static> {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<Option<String>> for FieldValue<'static> {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Null, Self::from)
    }
}

/// Uniform attribute access over any record representation.
///
/// Implementors return [`FieldValue::Null`] for fields they do not know.
pub trait Record {
    /// Reads the attribute called `field`.
    fn get(&self, field: &str) -> FieldValue<'_>;

    /// Reads a text attribute; missing or non-text values read as empty.
    fn text(&self, field: &str) -> Cow<'_, str> {
        match self.get(field) {
            FieldValue::Text(s) => s,
            _ => Cow::Borrowed(""),
        }
    }

    /// Reads an integer attribute; missing values read as 0.
    fn integer(&self, field: &str) -> i64 {
        self.get(field).as_integer().unwrap_or(0)
    }

    /// Reads the tag list; records without tags read as empty.
    fn tags(&self) -> Cow<'_, [String]> {
        match self.get("tags") {
            FieldValue::List(tags) => tags,
            _ => Cow::Borrowed(&[][..]),
        }
    }
}

/// A note as stored by the surrounding application.
///
/// `is_favorite` and `trash` keep the 0/1 integer encoding of the stored data
/// so that condition constraints compare against the raw values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub notebook_id: Option<String>,
    #[serde(default)]
    pub is_favorite: i64,
    #[serde(default)]
    pub trash: i64,
    #[serde(default)]
    pub task_all: i64,
    #[serde(default)]
    pub task_completed: i64,
    /// Creation time in Unix milliseconds.
    #[serde(default)]
    pub created: i64,
}

impl Note {
    /// Creates an empty, active note with the given id and title, stamped with the current time.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: String::new(),
            tags: Vec::new(),
            notebook_id: None,
            is_favorite: 0,
            trash: 0,
            task_all: 0,
            task_completed: 0,
            created: Utc::now().timestamp_millis(),
        }
    }

    /// Returns the creation time, or `None` if `created` is out of range.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.created).single()
    }
}

impl Record for Note {
    fn get(&self, field: &str) -> FieldValue<'_> {
        match field {
            "id" => FieldValue::from(self.id.as_str()),
            "title" => FieldValue::from(self.title.as_str()),
            "content" => FieldValue::from(self.content.as_str()),
            "tags" => FieldValue::List(Cow::Borrowed(self.tags.as_slice())),
            "notebookId" => self.notebook_id.as_deref().map_or(FieldValue::Null, FieldValue::from),
            "isFavorite" => FieldValue::Integer(self.is_favorite),
            "trash" => FieldValue::Integer(self.trash),
            "taskAll" => FieldValue::Integer(self.task_all),
            "taskCompleted" => FieldValue::Integer(self.task_completed),
            "created" => FieldValue::Integer(self.created),
            _ => FieldValue::Null,
        }
    }
}
