// src/services/catalog_service.rs
//
// Catalog Service - the browse controller behind the host UI boundary
//
// RULES:
// - The base collection is fetched exactly once and never mutated
// - Every state mutation triggers one synchronous full re-derivation
//   (base -> filtered -> facets -> sorted) from a single `now` snapshot;
//   no caller ever observes a partially updated derived state
// - The presentation layer drives this through the operations below and
//   must not filter, sort or paginate on its own

use crate::application::dto::{CharacterDetail, CharacterRow};
use crate::domain::{validate_character, Character};
use crate::error::{AppError, AppResult};
use crate::integrations::CharacterSource;
use crate::query::{
    filter, page_window, sort, total_pages, Facets, FilterSpec, SortKey, SortSpec,
    DEFAULT_PAGE_SIZE, PAGE_SIZES,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// The mutable view state, serializable as one unit.
///
/// Owned exclusively by `CatalogService`; mutated only through its
/// operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewState {
    /// Current page, 1-based
    pub page: usize,
    /// One of `PAGE_SIZES`
    pub page_size: usize,
    pub filter: FilterSpec,
    /// `None` until the first sort request
    pub sort: Option<SortSpec>,
    /// Id of the record open in the detail view, at most one
    pub selected: Option<i64>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            filter: FilterSpec::default(),
            sort: None,
            selected: None,
        }
    }
}

pub struct CatalogService {
    source: Arc<dyn CharacterSource>,
    base: Vec<Character>,
    loaded: bool,
    state: ViewState,
    /// Filtered (and, once a sort is set, sorted) collection
    derived: Vec<Character>,
    /// Facets of the filtered collection
    facets: Facets,
}

impl CatalogService {
    pub fn new(source: Arc<dyn CharacterSource>) -> Self {
        Self {
            source,
            base: Vec::new(),
            loaded: false,
            state: ViewState::default(),
            derived: Vec::new(),
            facets: Facets::default(),
        }
    }

    // ------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------

    /// Exhaustively fetch the base collection. Allowed exactly once per
    /// service lifetime; a failed fetch leaves the service unloaded and
    /// exposes no partial data.
    pub async fn load_all(&mut self) -> AppResult<usize> {
        if self.loaded {
            return Err(AppError::AlreadyLoaded);
        }

        let base = self.source.fetch_all().await?;
        for character in &base {
            if let Err(err) = validate_character(character) {
                log::warn!("record {} kept despite failed validation: {}", character.id, err);
            }
        }

        log::info!("catalog loaded: {} records", base.len());
        self.base = base;
        self.loaded = true;
        self.rederive();
        Ok(self.base.len())
    }

    /// Replace the filter specification and reset to page 1.
    pub fn set_filter(&mut self, spec: FilterSpec) {
        self.state.filter = spec;
        self.state.page = 1;
        self.rederive();
    }

    /// Request a sort on `key`: the current key toggles its direction,
    /// a new key starts ascending. Does not reset the page.
    pub fn set_sort(&mut self, key: SortKey) {
        self.state.sort = Some(SortSpec::requested(self.state.sort, key));
        self.rederive();
    }

    /// Move to page `n` (floored to 1). Out-of-range pages are valid
    /// and show an empty window.
    pub fn set_page(&mut self, n: usize) {
        self.state.page = n.max(1);
    }

    /// Switch the page size and reset to page 1.
    pub fn set_page_size(&mut self, size: usize) -> AppResult<()> {
        if !PAGE_SIZES.contains(&size) {
            return Err(AppError::InvalidPageSize(size));
        }
        self.state.page_size = size;
        self.state.page = 1;
        Ok(())
    }

    /// Open the detail view on `id`, or close it with `None`. Selecting
    /// a record replaces any previous selection.
    pub fn select_record(&mut self, id: Option<i64>) -> AppResult<()> {
        if let Some(id) = id {
            if !self.base.iter().any(|c| c.id == id) {
                return Err(AppError::NotFound);
            }
        }
        self.state.selected = id;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Read accessors
    // ------------------------------------------------------------------

    /// The records of the current page, post filter and sort.
    pub fn visible_window(&self) -> &[Character] {
        page_window(&self.derived, self.state.page, self.state.page_size)
    }

    /// The current page projected for listing display (approximate age,
    /// episode identifiers).
    pub fn visible_rows(&self) -> Vec<CharacterRow> {
        let now = Utc::now();
        self.visible_window()
            .iter()
            .map(|character| CharacterRow::from_character(character, now))
            .collect()
    }

    /// Facet values of the filtered collection.
    pub fn facets(&self) -> &Facets {
        &self.facets
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.derived.len(), self.state.page_size)
    }

    /// Number of records after filtering.
    pub fn total_count(&self) -> usize {
        self.derived.len()
    }

    /// The record open in the detail view, if any.
    pub fn selected(&self) -> Option<&Character> {
        let id = self.state.selected?;
        self.base.iter().find(|c| c.id == id)
    }

    /// Detail projection of the selection (calendar age).
    pub fn selected_detail(&self) -> Option<CharacterDetail> {
        self.selected()
            .map(|character| CharacterDetail::from_character(character, Utc::now()))
    }

    pub fn view_state(&self) -> &ViewState {
        &self.state
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    // ------------------------------------------------------------------
    // Derivation
    // ------------------------------------------------------------------

    /// One-directional recomputation: base -> filtered -> facets, then
    /// sort. A single `now` snapshot keeps the age predicate and the
    /// Age sort key consistent within one derivation.
    fn rederive(&mut self) {
        let now = Utc::now();
        self.derived = filter::apply(&self.base, &self.state.filter, now);
        self.facets = Facets::from_records(&self.derived);
        if let Some(spec) = self.state.sort {
            sort::sort_in_place(&mut self.derived, &spec, now);
        }
    }
}
