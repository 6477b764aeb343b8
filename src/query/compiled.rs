//! Query compilation
//!
//! Turns a caller-supplied [`QuerySpec`] into a [`CompiledQuery`] whose
//! patterns are compiled once, up front. An invalid pattern is reported here
//! and never reaches the document scan.

use std::collections::{HashMap, HashSet};

use regex::Regex;

use crate::error::{Result, RummageError};
use crate::models::QuerySpec;

/// Direction of the ranking
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// `"asc"` sorts ascending; every other mode, including empty, sorts descending
    pub fn from_mode(mode: &str) -> Self {
        if mode == "asc" {
            SortOrder::Asc
        } else {
            SortOrder::Desc
        }
    }

    /// Orient an ascending comparison result
    pub fn apply(self, ordering: std::cmp::Ordering) -> std::cmp::Ordering {
        match self {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

/// Ordered sort fields plus direction
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SortSpec {
    pub fields: Vec<String>,
    pub order: SortOrder,
}

impl SortSpec {
    /// Parse a comma-separated field list; blank entries are dropped
    pub fn parse(sort_bys: &str, sort_mode: &str) -> Self {
        let fields = sort_bys
            .split(',')
            .map(str::trim)
            .filter(|field| !field.is_empty())
            .map(str::to_string)
            .collect();
        Self {
            fields,
            order: SortOrder::from_mode(sort_mode),
        }
    }
}

/// Allowed values for one filter field
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AllowedValues(HashSet<String>);

impl AllowedValues {
    /// Split a comma-separated list. An empty list allows nothing.
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::default();
        }
        Self(raw.split(',').map(str::to_string).collect())
    }

    pub fn contains(&self, value: &str) -> bool {
        self.0.contains(value)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Query with compiled patterns; immutable once built
#[derive(Clone, Debug, Default)]
pub struct CompiledQuery {
    pub ands: HashMap<String, Regex>,
    pub ors: HashMap<String, Regex>,
    pub filters: HashMap<String, AllowedValues>,
    pub sort: SortSpec,
}

impl CompiledQuery {
    /// Compile every pattern in `spec`, failing on the first invalid one
    pub fn compile(spec: &QuerySpec) -> Result<Self> {
        Ok(Self {
            ands: compile_patterns(&spec.ands)?,
            ors: compile_patterns(&spec.ors)?,
            filters: spec
                .filters
                .iter()
                .map(|(field, raw)| (field.clone(), AllowedValues::parse(raw)))
                .collect(),
            sort: SortSpec::parse(&spec.sort_bys, &spec.sort_mode),
        })
    }

    /// A query with no conditions recalls every document
    pub fn is_match_all(&self) -> bool {
        self.ands.is_empty() && self.ors.is_empty() && self.filters.is_empty()
    }
}

fn compile_patterns(patterns: &HashMap<String, String>) -> Result<HashMap<String, Regex>> {
    patterns
        .iter()
        .map(|(field, pattern)| {
            Regex::new(pattern)
                .map(|regex| (field.clone(), regex))
                .map_err(|source| RummageError::InvalidPattern {
                    field: field.clone(),
                    source,
                })
        })
        .collect()
}
