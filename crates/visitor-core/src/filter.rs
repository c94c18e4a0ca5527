//! Client-side filtering of the visitor list.
//!
//! The filtered view is a pure function of the record list and the current
//! criteria. Nothing is cached; callers recompute it whenever either changes.

use chrono::NaiveDate;

use crate::record::VisitorRecord;

/// Case-insensitive substring match of `term` against name, purpose and
/// contact person. An empty term matches every record; a missing field
/// never matches a non-empty term.
pub fn matches_search(record: &VisitorRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();

    [&record.name, &record.purpose, &record.contact_person]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Records matching `term`, in their original order.
pub fn filter_by_search<'a>(records: &'a [VisitorRecord], term: &str) -> Vec<&'a VisitorRecord> {
    records
        .iter()
        .filter(|record| matches_search(record, term))
        .collect()
}

/// Everything that narrows the visible list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria<'a> {
    pub search_term: &'a str,
    /// When set, only visits checked in on this day are kept.
    pub date: Option<NaiveDate>,
}

impl<'a> FilterCriteria<'a> {
    /// Criteria with only a search term.
    pub fn search(term: &'a str) -> Self {
        Self {
            search_term: term,
            date: None,
        }
    }

    /// Whether `record` passes every active criterion.
    pub fn matches(&self, record: &VisitorRecord) -> bool {
        if !matches_search(record, self.search_term) {
            return false;
        }
        match self.date {
            Some(day) => record.time_in_date() == Some(day),
            None => true,
        }
    }

    /// Stable filter of `records`.
    pub fn apply<'r>(&self, records: &'r [VisitorRecord]) -> Vec<&'r VisitorRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}
