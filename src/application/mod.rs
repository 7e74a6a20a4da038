// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - This layer sits between the presentation and the services
// - It translates domain entities into UI-facing DTOs
// - The presentation layer never sees raw derivation internals

pub mod dto;

pub use dto::{CharacterDetail, CharacterRow};
