// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are UI-friendly representations
// - DTOs are simple, serializable structs
// - Conversion FROM domain entities only (never TO)
// - Derived fields are computed at conversion time, never stored

use crate::domain::{approximate_age_years, calendar_age_years, episode_ids, Character};
use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// LISTING DTO
// ============================================================================

/// One listing row. Carries the approximate (fixed-length-year) age the
/// listing filters and sorts on.
#[derive(Debug, Clone, Serialize)]
pub struct CharacterRow {
    pub id: i64,
    pub name: String,
    pub species: String,
    pub kind: String,
    pub gender: String,
    pub status: String,
    pub origin: String,
    pub location: String,
    pub image: String,
    /// `None` when the creation timestamp was unusable
    pub age: Option<i64>,
    pub episode_ids: Vec<String>,
}

impl CharacterRow {
    pub fn from_character(character: &Character, now: DateTime<Utc>) -> Self {
        Self {
            id: character.id,
            name: character.name.clone(),
            species: character.species.clone(),
            kind: character.kind.clone(),
            gender: character.gender.clone(),
            status: character.status.clone(),
            origin: character.origin.name.clone(),
            location: character.location.name.clone(),
            image: character.image.clone(),
            age: approximate_age_years(character, now),
            episode_ids: episode_ids(character).into_iter().map(String::from).collect(),
        }
    }
}

// ============================================================================
// DETAIL DTO
// ============================================================================

/// The detail view projection. Carries the calendar-aware age, which
/// can differ from the listing's approximate age for the same record.
#[derive(Debug, Clone, Serialize)]
pub struct CharacterDetail {
    pub id: i64,
    pub name: String,
    pub image: String,
    pub status: String,
    pub species: String,
    pub kind: String,
    pub gender: String,
    pub origin: String,
    pub location: String,
    pub episode_count: usize,
    pub episode_ids: Vec<String>,
    /// Calendar-aware age; `None` when the creation timestamp was unusable
    pub age: Option<i32>,
    /// RFC 3339 creation timestamp, if usable
    pub created: Option<String>,
}

impl CharacterDetail {
    pub fn from_character(character: &Character, now: DateTime<Utc>) -> Self {
        Self {
            id: character.id,
            name: character.name.clone(),
            image: character.image.clone(),
            status: character.status.clone(),
            species: character.species.clone(),
            kind: character.kind.clone(),
            gender: character.gender.clone(),
            origin: character.origin.name.clone(),
            location: character.location.name.clone(),
            episode_count: character.episode.len(),
            episode_ids: episode_ids(character).into_iter().map(String::from).collect(),
            age: calendar_age_years(character, now),
            created: character.created.map(|dt| dt.to_rfc3339()),
        }
    }
}
