use super::entity::Character;
use crate::domain::{DomainError, DomainResult};

/// Validates all Character invariants
/// These are the absolute rules that must hold for a Character to be valid
pub fn validate_character(character: &Character) -> DomainResult<()> {
    validate_id(character.id)?;
    validate_name(&character.name)?;
    Ok(())
}

/// Identifier must be positive
fn validate_id(id: i64) -> DomainResult<()> {
    if id <= 0 {
        return Err(DomainError::InvariantViolation(format!(
            "Character id must be positive, got {}",
            id
        )));
    }
    Ok(())
}

/// Name cannot be empty
fn validate_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Character name cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Invariants that must hold true for the Character domain:
///
/// 1. Identity (id) is immutable and positive
/// 2. Name is non-empty
/// 3. Records are never mutated after fetch
/// 4. A record with an unparseable creation timestamp stays in the
///    collection; only its derived ages are undefined
