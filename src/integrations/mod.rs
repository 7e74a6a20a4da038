// src/integrations/mod.rs
//
// External Integrations Module

pub mod listing;

pub use listing::client::{
    fetch_all_pages, CharacterPage, CharacterSource, ListingClient, PageFetcher, PageInfo,
    LISTING_URL,
};
