// src/query/sort.rs
//
// Sort Engine
//
// Textual keys compare as stored (case-sensitive), in contrast with the
// case-insensitive filter. The Age key recomputes the approximate age
// per comparison from one `now` snapshot so sort order agrees with the
// age the listing filters on. The underlying sort is stable: equal keys
// keep their input order in both directions.

use crate::domain::{approximate_age_years, Character};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sortable columns of the listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Name,
    Species,
    Gender,
    Status,
    Age,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// (key, direction) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortSpec {
    /// The spec resulting from requesting `key` while `current` is in
    /// effect: the same key toggles direction, a different key (or no
    /// current sort) starts ascending.
    pub fn requested(current: Option<SortSpec>, key: SortKey) -> SortSpec {
        let direction = match current {
            Some(spec) if spec.key == key => match spec.direction {
                SortDirection::Ascending => SortDirection::Descending,
                SortDirection::Descending => SortDirection::Ascending,
            },
            _ => SortDirection::Ascending,
        };
        SortSpec { key, direction }
    }
}

/// A new collection ordered by `spec`; the input is not mutated.
pub fn sorted(records: &[Character], spec: &SortSpec, now: DateTime<Utc>) -> Vec<Character> {
    let mut out = records.to_vec();
    sort_in_place(&mut out, spec, now);
    out
}

pub(crate) fn sort_in_place(records: &mut [Character], spec: &SortSpec, now: DateTime<Utc>) {
    records.sort_by(|a, b| {
        let ordering = compare_by_key(a, b, spec.key, now);
        match spec.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

fn compare_by_key(a: &Character, b: &Character, key: SortKey, now: DateTime<Utc>) -> Ordering {
    match key {
        SortKey::Name => a.name.cmp(&b.name),
        SortKey::Species => a.species.cmp(&b.species),
        SortKey::Gender => a.gender.cmp(&b.gender),
        SortKey::Status => a.status.cmp(&b.status),
        // Unknown ages (None) order before known ones
        SortKey::Age => approximate_age_years(a, now).cmp(&approximate_age_years(b, now)),
    }
}
