// src/query/mod.rs
//
// Query Engine - pure, total derivations over the fetched collection
//
// Derivation is strictly one-directional: base -> filtered -> facets,
// then sort, then page slicing. Every step recomputes in full from its
// input; nothing here holds state.

pub mod facets;
pub mod filter;
pub mod page;
pub mod sort;

pub use facets::Facets;
pub use filter::FilterSpec;
pub use page::{page_window, total_pages, DEFAULT_PAGE_SIZE, PAGE_SIZES};
pub use sort::{sorted, SortDirection, SortKey, SortSpec};
