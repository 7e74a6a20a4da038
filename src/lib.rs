// src/lib.rs
// CharHub - in-memory browse core for a character catalog
//
// Architecture:
// - Domain-centric: records and derived attributes live in domain
// - Pure query engine: filter -> facets -> sort -> page, recomputed in
//   full on every input change
// - Explicit: one controller owns the view state; no implicit behavior
// - The presentation layer is an external collaborator driving the
//   CatalogService operations and reading DTOs back

pub mod application;
pub mod domain;
pub mod error;
pub mod integrations;
pub mod query;
pub mod services;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    approximate_age_years, calendar_age_years, episode_ids, validate_character, Character,
    LocationRef,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Query Engine
// ============================================================================

pub use query::{
    page_window, total_pages, Facets, FilterSpec, SortDirection, SortKey, SortSpec,
    DEFAULT_PAGE_SIZE, PAGE_SIZES,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{CatalogService, ViewState};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{CharacterDetail, CharacterRow};

// ============================================================================
// PUBLIC API - Integrations
// ============================================================================

pub use integrations::{CharacterSource, ListingClient, PageFetcher, LISTING_URL};
