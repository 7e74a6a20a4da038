pub mod derived;
pub mod entity;
pub mod invariants;

pub use derived::{approximate_age_years, calendar_age_years, episode_ids};
pub use entity::{Character, LocationRef};
pub use invariants::validate_character;
