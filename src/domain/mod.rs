// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file declares all domain modules and re-exports their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod character;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Character Domain
pub use character::{
    approximate_age_years, calendar_age_years, episode_ids, validate_character, Character,
    LocationRef,
};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
