// src/query/facets.rs
//
// Facet Extractor
//
// Facets are the distinct values observed per categorical field. They
// are always derived from the *filtered* collection, so narrowing one
// facet can remove options from the others, and never from anywhere
// else: no value is invented that is absent from the input records.

use crate::domain::Character;
use serde::Serialize;
use std::collections::HashSet;

/// Distinct values per categorical field, first-seen order, duplicates
/// collapsed. Consumers prepend their own "no constraint" option.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Facets {
    pub species: Vec<String>,
    pub kinds: Vec<String>,
    pub genders: Vec<String>,
    pub statuses: Vec<String>,
    pub origins: Vec<String>,
    pub locations: Vec<String>,
}

impl Facets {
    /// Full recomputation from a record collection. No incremental
    /// updates; callers re-derive on every change to their input.
    pub fn from_records(records: &[Character]) -> Self {
        Self {
            species: distinct(records, |c| &c.species),
            kinds: distinct(records, |c| &c.kind),
            genders: distinct(records, |c| &c.gender),
            statuses: distinct(records, |c| &c.status),
            origins: distinct(records, |c| &c.origin.name),
            locations: distinct(records, |c| &c.location.name),
        }
    }
}

fn distinct<'a>(records: &'a [Character], field: impl Fn(&'a Character) -> &'a str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut values = Vec::new();
    for record in records {
        let value = field(record);
        if seen.insert(value) {
            values.push(value.to_string());
        }
    }
    values
}
