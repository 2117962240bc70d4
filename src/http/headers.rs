//! Header reshaping for gateway payloads.
//!
//! # Responsibilities
//! - Group a response's header list by name
//! - Split the groups into single-value and multi-value maps
//!
//! # Design Decisions
//! - Names are compared case-insensitively; `HeaderMap` normalizes them to lowercase
//! - Grouping keeps the first-seen order of names and the original order of values
//! - Non-UTF-8 header values are converted lossily instead of failing

use std::collections::HashMap;

use axum::http::HeaderMap;

/// Header name to exactly one value.
pub type SingleValueHeaders = HashMap<String, String>;

/// Header name to two or more values, in response order.
pub type MultiValueHeaders = HashMap<String, Vec<String>>;

/// Response headers grouped by name.
///
/// Every entry holds at least one value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedHeaders {
    entries: Vec<(String, Vec<String>)>,
}

impl GroupedHeaders {
    /// Group a header list by name.
    pub fn from_header_map(headers: &HeaderMap) -> Self {
        let mut grouped = Self::default();
        for (name, value) in headers.iter() {
            let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
            grouped.push(name.as_str(), value);
        }
        grouped
    }

    /// Append a value under `name`, creating the group on first sight.
    pub fn push(&mut self, name: &str, value: String) {
        match self
            .entries
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
        {
            Some((_, values)) => values.push(value),
            None => self.entries.push((name.to_ascii_lowercase(), vec![value])),
        }
    }

    /// Values recorded for `name`, if any.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, values)| values.as_slice())
    }

    /// Header names in first-seen order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Split into single-value and multi-value maps.
    ///
    /// The two maps never share a key and together cover every grouped name.
    pub fn partition(self) -> (SingleValueHeaders, MultiValueHeaders) {
        let mut single = SingleValueHeaders::new();
        let mut multi = MultiValueHeaders::new();

        for (name, mut values) in self.entries {
            if values.len() == 1 {
                if let Some(value) = values.pop() {
                    single.insert(name, value);
                }
            } else {
                multi.insert(name, values);
            }
        }

        (single, multi)
    }
}
