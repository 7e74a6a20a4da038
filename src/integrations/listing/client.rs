// src/integrations/listing/client.rs
//
// Remote Listing Integration
//
// ARCHITECTURE:
// - HTTP client for the paginated character listing endpoint
// - Walks the cursor chain to completion, strictly sequentially
// - Maps wire JSON -> domain records (NO domain mutation)
// - Used by CatalogService through the CharacterSource seam
//
// RULES:
// - Page n+1 is requested only after page n's body has been decoded
// - Any page failure aborts the whole load; no partial result, no retry
// - This is INFRASTRUCTURE, not DOMAIN

use crate::domain::Character;
use crate::error::{AppError, AppResult};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// Fixed starting point of the exhaustive fetch
pub const LISTING_URL: &str = "https://rickandmortyapi.com/api/character";

/// One page of the listing envelope:
/// `{ info: { next: string | null }, results: Character[] }`
#[derive(Debug, Clone, Deserialize)]
pub struct CharacterPage {
    pub info: PageInfo,
    pub results: Vec<Character>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageInfo {
    /// URL of the next page, verbatim; `None` signals the last page
    pub next: Option<String>,
}

/// Retrieval of a single listing page. The seam the pagination walker
/// and its tests are written against.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_page(&self, url: &str) -> AppResult<CharacterPage>;
}

/// Retrieval of the complete base collection in one call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CharacterSource: Send + Sync {
    async fn fetch_all(&self) -> AppResult<Vec<Character>>;
}

/// Walks the cursor chain from `start_url` to completion, concatenating
/// page results in response order.
///
/// Strictly sequential: each page request is issued only after the
/// previous one resolved. The first failure aborts the walk and no
/// partial collection is exposed.
pub async fn fetch_all_pages<F>(fetcher: &F, start_url: &str) -> AppResult<Vec<Character>>
where
    F: PageFetcher + ?Sized,
{
    let mut all = Vec::new();
    let mut next = Some(start_url.to_string());

    while let Some(url) = next {
        let page = fetcher.fetch_page(&url).await?;
        log::debug!("fetched {} records from {}", page.results.len(), url);
        all.extend(page.results);
        next = page.info.next;
    }

    log::info!("exhaustive fetch complete: {} records", all.len());
    Ok(all)
}

/// Listing API client
pub struct ListingClient {
    start_url: String,
    http_client: Client,
}

impl ListingClient {
    pub fn new() -> Self {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            start_url: LISTING_URL.to_string(),
            http_client,
        }
    }

    /// Create a client walking from a non-default starting URL
    pub fn with_start_url(start_url: impl Into<String>) -> Self {
        let mut client = Self::new();
        client.start_url = start_url.into();
        client
    }
}

impl Default for ListingClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PageFetcher for ListingClient {
    async fn fetch_page(&self, url: &str) -> AppResult<CharacterPage> {
        let response = self.http_client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(AppError::UnexpectedStatus(response.status()));
        }

        let page: CharacterPage = response.json().await?;
        Ok(page)
    }
}

#[async_trait]
impl CharacterSource for ListingClient {
    async fn fetch_all(&self) -> AppResult<Vec<Character>> {
        fetch_all_pages(self, &self.start_url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LocationRef;
    use std::sync::Mutex;

    fn character(id: i64, name: &str) -> Character {
        Character {
            id,
            name: name.to_string(),
            species: "Human".to_string(),
            kind: String::new(),
            gender: "Male".to_string(),
            status: "Alive".to_string(),
            origin: LocationRef {
                name: "Earth".to_string(),
                url: String::new(),
            },
            location: LocationRef {
                name: "Earth".to_string(),
                url: String::new(),
            },
            image: String::new(),
            episode: Vec::new(),
            created: None,
        }
    }

    /// Serves a scripted sequence of responses and records the URLs
    /// requested, in order.
    struct ScriptedFetcher {
        responses: Mutex<Vec<AppResult<CharacterPage>>>,
        requested: Mutex<Vec<String>>,
    }

    impl ScriptedFetcher {
        fn new(responses: Vec<AppResult<CharacterPage>>) -> Self {
            let mut responses = responses;
            responses.reverse();
            Self {
                responses: Mutex::new(responses),
                requested: Mutex::new(Vec::new()),
            }
        }

        fn requested_urls(&self) -> Vec<String> {
            self.requested.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PageFetcher for ScriptedFetcher {
        async fn fetch_page(&self, url: &str) -> AppResult<CharacterPage> {
            self.requested.lock().unwrap().push(url.to_string());
            self.responses
                .lock()
                .unwrap()
                .pop()
                .unwrap_or_else(|| Err(AppError::Other("script exhausted".to_string())))
        }
    }

    fn page(next: Option<&str>, records: Vec<Character>) -> AppResult<CharacterPage> {
        Ok(CharacterPage {
            info: PageInfo {
                next: next.map(String::from),
            },
            results: records,
        })
    }

    #[tokio::test]
    async fn test_fetch_all_concatenates_pages_in_order() {
        let fetcher = ScriptedFetcher::new(vec![
            page(Some("http://x/page/2"), vec![character(1, "a"), character(2, "b")]),
            page(Some("http://x/page/3"), vec![character(3, "c")]),
            page(None, vec![character(4, "d")]),
        ]);

        let all = fetch_all_pages(&fetcher, "http://x/page/1").await.unwrap();

        let ids: Vec<i64> = all.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(
            fetcher.requested_urls(),
            vec!["http://x/page/1", "http://x/page/2", "http://x/page/3"]
        );
    }

    #[tokio::test]
    async fn test_single_page_listing() {
        let fetcher = ScriptedFetcher::new(vec![page(None, vec![character(1, "a")])]);
        let all = fetch_all_pages(&fetcher, "http://x/page/1").await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(fetcher.requested_urls().len(), 1);
    }

    #[tokio::test]
    async fn test_page_failure_aborts_without_partial_result() {
        let fetcher = ScriptedFetcher::new(vec![
            page(Some("http://x/page/2"), vec![character(1, "a")]),
            Err(AppError::Other("boom".to_string())),
            page(None, vec![character(2, "b")]),
        ]);

        let result = fetch_all_pages(&fetcher, "http://x/page/1").await;

        assert!(result.is_err());
        // The walk stopped at the failing page
        assert_eq!(fetcher.requested_urls().len(), 2);
    }

    #[test]
    fn test_client_uses_fixed_listing_url() {
        let client = ListingClient::new();
        assert_eq!(client.start_url, LISTING_URL);
    }

    #[test]
    fn test_client_with_custom_start_url() {
        let client = ListingClient::with_start_url("http://localhost:8080/api/character");
        assert_eq!(client.start_url, "http://localhost:8080/api/character");
    }
}
