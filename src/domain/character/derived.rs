// src/domain/character/derived.rs
//
// Derived attributes: pure functions of (character, now), evaluated on
// demand so they always reflect the current clock. Never cached.
//
// There are two distinct age contracts on purpose:
// - `approximate_age_years`: fixed-length-year division; used by the
//   listing context (age filter bounds and the Age sort key).
// - `calendar_age_years`: calendar difference with month/day rollover;
//   used by the detail view only.
// The two can disagree for the same record. Callers pick one per context.

use super::entity::Character;
use chrono::{DateTime, Datelike, Utc};

/// Seconds in a 365.25-day year
const SECONDS_PER_YEAR: f64 = 365.25 * 24.0 * 60.0 * 60.0;

/// Whole years elapsed since creation, as elapsed time divided by a
/// fixed-length year, truncated toward zero.
///
/// Returns `None` when the record carries no usable creation timestamp.
pub fn approximate_age_years(character: &Character, now: DateTime<Utc>) -> Option<i64> {
    let created = character.created?;
    let elapsed = (now - created).num_seconds() as f64;
    Some((elapsed / SECONDS_PER_YEAR).trunc() as i64)
}

/// Calendar-aware age: year difference, minus one when the current
/// (month, day) precedes the creation (month, day) within the year.
///
/// Returns `None` when the record carries no usable creation timestamp.
pub fn calendar_age_years(character: &Character, now: DateTime<Utc>) -> Option<i32> {
    let created = character.created?;
    let mut age = now.year() - created.year();
    if (now.month(), now.day()) < (created.month(), created.day()) {
        age -= 1;
    }
    Some(age)
}

/// The trailing path segment of each episode reference, in original
/// order. No deduplication.
pub fn episode_ids(character: &Character) -> Vec<&str> {
    character
        .episode
        .iter()
        .map(|reference| reference.rsplit('/').next().unwrap_or(reference))
        .collect()
}
