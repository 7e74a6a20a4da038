// src/query/filter.rs
//
// Predicate Engine
//
// RULES:
// - All active predicates are ANDed; no OR, no negation
// - An empty string / absent bound means "no constraint on this field"
// - Filtering preserves the relative order of the input collection
// - Age bounds use the listing (approximate) age formula

use crate::domain::{approximate_age_years, episode_ids, Character};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Conjunctive filter specification.
///
/// Text fields default to the empty string (unconstrained); age bounds
/// default to `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSpec {
    /// Case-insensitive substring on the display name
    pub name: String,
    /// Case-insensitive substring on the species label
    pub species: String,
    /// Exact match on the sub-type label (the endpoint's `type`)
    pub kind: String,
    /// Exact match on the gender label
    pub gender: String,
    /// Exact match on the status label
    pub status: String,
    /// Exact match on the origin's display name
    pub origin: String,
    /// Exact match on the location's display name
    pub location: String,
    /// Membership among the record's derived episode identifiers
    pub episode: String,
    /// Inclusive lower bound on the approximate age
    pub min_age: Option<i64>,
    /// Inclusive upper bound on the approximate age
    pub max_age: Option<i64>,
}

impl FilterSpec {
    /// True when every active predicate holds for `character`.
    ///
    /// A record whose age is undefined (unparseable creation timestamp)
    /// fails any active age bound but passes when no bound is set.
    pub fn matches(&self, character: &Character, now: DateTime<Utc>) -> bool {
        contains_ci(&character.name, &self.name)
            && contains_ci(&character.species, &self.species)
            && exact_or_any(&character.kind, &self.kind)
            && exact_or_any(&character.gender, &self.gender)
            && exact_or_any(&character.status, &self.status)
            && exact_or_any(&character.origin.name, &self.origin)
            && exact_or_any(&character.location.name, &self.location)
            && self.matches_episode(character)
            && self.matches_age(character, now)
    }

    fn matches_episode(&self, character: &Character) -> bool {
        self.episode.is_empty() || episode_ids(character).contains(&self.episode.as_str())
    }

    fn matches_age(&self, character: &Character, now: DateTime<Utc>) -> bool {
        if self.min_age.is_none() && self.max_age.is_none() {
            return true;
        }
        let Some(age) = approximate_age_years(character, now) else {
            return false;
        };
        self.min_age.is_none_or(|min| age >= min) && self.max_age.is_none_or(|max| age <= max)
    }
}

/// The order-preserving subsequence of `base` matching `spec`.
pub fn apply(base: &[Character], spec: &FilterSpec, now: DateTime<Utc>) -> Vec<Character> {
    base.iter()
        .filter(|character| spec.matches(character, now))
        .cloned()
        .collect()
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn exact_or_any(value: &str, wanted: &str) -> bool {
    wanted.is_empty() || value == wanted
}
