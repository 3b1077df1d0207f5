//! Free-text filtering over dashboard records.
//!
//! A record matches when any of its designated fields contains the query,
//! ignoring case. Blank queries match everything and input order is kept.

use std::borrow::Cow;

use crate::models::{
    alumni::ActiveUser, certification::CertificationRecord, credential::Credential,
    engagement::EngagementRecord,
};

/// A record kind that can be matched against a search query
pub trait Searchable {
    /// The text fields a query is matched against
    fn search_fields(&self) -> Vec<Cow<'_, str>>;

    /// `needle` must already be normalized with [`normalize_query`]
    fn matches_normalized(&self, needle: &str) -> bool {
        needle.is_empty()
            || self
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(needle))
    }
}

pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Returns the matching records in their original order
pub fn filter_records<'a, T: Searchable>(query: &str, records: &'a [T]) -> Vec<&'a T> {
    let needle = normalize_query(query);
    records
        .iter()
        .filter(|record| record.matches_normalized(&needle))
        .collect()
}

/// Owned variant of [`filter_records`]
pub fn retain_matching<T: Searchable>(query: &str, mut records: Vec<T>) -> Vec<T> {
    let needle = normalize_query(query);
    if !needle.is_empty() {
        records.retain(|record| record.matches_normalized(&needle));
    }
    records
}

impl Searchable for ActiveUser {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.name.as_str()),
            Cow::Borrowed(self.company.as_str()),
            Cow::Borrowed(self.email.as_str()),
        ]
    }
}

impl Searchable for EngagementRecord {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.name.as_str()),
            Cow::Borrowed(self.email.as_str()),
            Cow::Borrowed(self.department.as_str()),
            Cow::Borrowed(self.engagement_rate.as_str()),
            Cow::Borrowed(self.status().as_str()),
        ]
    }
}

impl Searchable for CertificationRecord {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.name.as_str()),
            Cow::Borrowed(self.email.as_str()),
            Cow::Borrowed(self.category.as_str()),
            Cow::Owned(self.completed.to_string()),
        ]
    }
}

impl Searchable for Credential {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.title.as_str()),
            Cow::Borrowed(self.issuer.as_str()),
            Cow::Borrowed(self.date.as_str()),
            Cow::Borrowed(self.desc.as_str()),
        ]
    }
}
