//! Per-document inclusion test
//!
//! A document is recalled when all three predicate groups pass:
//!
//! - **AND**: every AND pattern matched the keyword of the same name
//!   (substring search, not a full-string match).
//! - **OR**: at least one OR pattern matched, when any are configured.
//! - **Filter**: at least one filtered field holds an allowed value, when any
//!   filters are configured. Filter fields are alternatives, not requirements.
//!
//! The keywords are visited once; each visit checks the AND, OR and filter
//! entries keyed by that field.

use crate::models::{Document, Keywords};
use crate::query::compiled::CompiledQuery;

/// Decide whether a document with `keywords` is recalled by `query`
pub fn evaluate(query: &CompiledQuery, keywords: &Keywords) -> bool {
    let mut and_matches = 0usize;
    let mut or_matches = 0usize;
    let mut filter_matched = query.filters.is_empty();

    for (field, value) in keywords {
        if let Some(regex) = query.ands.get(field) {
            if regex.is_match(value) {
                and_matches += 1;
            }
        }

        if let Some(regex) = query.ors.get(field) {
            if regex.is_match(value) {
                or_matches += 1;
            }
        }

        if let Some(allowed) = query.filters.get(field) {
            if allowed.contains(value) {
                filter_matched = true;
            }
        }
    }

    let and_passed = and_matches == query.ands.len();
    let or_passed = query.ors.is_empty() || or_matches > 0;

    and_passed && or_passed && filter_matched
}

/// Collect every document recalled by `query`
pub fn recall<'a, I>(query: &CompiledQuery, docs: I) -> Vec<&'a Document>
where
    I: IntoIterator<Item = &'a Document>,
{
    if query.is_match_all() {
        return docs.into_iter().collect();
    }
    docs.into_iter()
        .filter(|doc| evaluate(query, &doc.keywords))
        .collect()
}
