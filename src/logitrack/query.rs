//! Search and status filtering.
//!
//! A query is a free-text term and a status filter combined with AND. The text
//! matches case-insensitively as a substring of any of the record's search
//! fields; an empty term matches everything. The result keeps the input order.

use crate::error::Result;
use crate::model::{Record, RecordStatus};
use std::fmt;
use std::str::FromStr;

/// Either every status, or exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter<S> {
    All,
    Only(S),
}

impl<S> Default for StatusFilter<S> {
    fn default() -> Self {
        StatusFilter::All
    }
}

impl<S: RecordStatus> StatusFilter<S> {
    pub fn matches(&self, status: S) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl<S: RecordStatus> FromStr for StatusFilter<S> {
    type Err = crate::error::DashError;

    /// `"all"` or an exact status label.
    fn from_str(s: &str) -> Result<Self> {
        if s == "all" {
            return Ok(StatusFilter::All);
        }
        s.parse().map(StatusFilter::Only)
    }
}

impl<S: RecordStatus> fmt::Display for StatusFilter<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str("all"),
            StatusFilter::Only(status) => write!(f, "{}", status),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query<S> {
    pub search_text: String,
    pub status: StatusFilter<S>,
}

impl<S> Default for Query<S> {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            status: StatusFilter::default(),
        }
    }
}

impl<S: RecordStatus> Query<S> {
    pub fn new(search_text: impl Into<String>, status: StatusFilter<S>) -> Self {
        Self {
            search_text: search_text.into(),
            status,
        }
    }

    pub fn matches<R: Record<Status = S>>(&self, record: &R) -> bool {
        self.status.matches(record.status()) && text_matches(record, &self.search_text)
    }
}

fn text_matches<R: Record>(record: &R, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Records satisfying `query`, in their original order.
pub fn filter<'a, R: Record>(records: &'a [R], query: &Query<R::Status>) -> Vec<&'a R> {
    records.iter().filter(|r| query.matches(*r)).collect()
}
