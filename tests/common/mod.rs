#![allow(dead_code)]

use async_trait::async_trait;
use rickdex::api::CatalogClient;
use rickdex::domain::{ApiError, CatalogPage, Character, PageInfo};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

type Key = (Option<String>, u32);

struct Scripted {
    delay: Duration,
    result: Result<CatalogPage, ApiError>,
}

/// Catalog client answering from a per-request script.
///
/// Requests with no scripted answer fail with a 404, like the real API does for
/// out-of-range pages.
#[derive(Default)]
pub struct MockCatalogClient {
    script: Mutex<HashMap<Key, VecDeque<Scripted>>>,
    calls: Mutex<Vec<Key>>,
}

impl MockCatalogClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_list(&self, page: u32, result: Result<CatalogPage, ApiError>) -> &Self {
        self.push((None, page), Duration::ZERO, result)
    }

    pub fn on_list_delayed(
        &self,
        page: u32,
        delay: Duration,
        result: Result<CatalogPage, ApiError>,
    ) -> &Self {
        self.push((None, page), delay, result)
    }

    pub fn on_search(&self, name: &str, page: u32, result: Result<CatalogPage, ApiError>) -> &Self {
        self.push((Some(name.to_string()), page), Duration::ZERO, result)
    }

    pub fn on_search_delayed(
        &self,
        name: &str,
        page: u32,
        delay: Duration,
        result: Result<CatalogPage, ApiError>,
    ) -> &Self {
        self.push((Some(name.to_string()), page), delay, result)
    }

    /// Every request received so far, as `(search name, page)`.
    pub fn calls(&self) -> Vec<Key> {
        self.calls.lock().unwrap().clone()
    }

    fn push(&self, key: Key, delay: Duration, result: Result<CatalogPage, ApiError>) -> &Self {
        self.script
            .lock()
            .unwrap()
            .entry(key)
            .or_default()
            .push_back(Scripted { delay, result });
        self
    }

    async fn respond(&self, key: Key) -> Result<CatalogPage, ApiError> {
        self.calls.lock().unwrap().push(key.clone());
        let scripted = self
            .script
            .lock()
            .unwrap()
            .get_mut(&key)
            .and_then(VecDeque::pop_front);

        match scripted {
            Some(Scripted { delay, result }) => {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                result
            }
            None => Err(ApiError::response(404, "There is nothing here")),
        }
    }
}

#[async_trait]
impl CatalogClient for MockCatalogClient {
    async fn list_page(&self, page: u32) -> Result<CatalogPage, ApiError> {
        self.respond((None, page)).await
    }

    async fn search_page(&self, name: &str, page: u32) -> Result<CatalogPage, ApiError> {
        self.respond((Some(name.to_string()), page)).await
    }
}

/// A page holding characters `first..first + len`.
pub fn page(first: u32, len: u32, count: u32, pages: u32) -> CatalogPage {
    CatalogPage {
        info: PageInfo {
            count,
            pages,
            next: None,
            prev: None,
        },
        results: (first..first + len)
            .map(|id| Character::new(id, format!("Character {id}")))
            .collect(),
    }
}

pub fn not_found() -> ApiError {
    ApiError::response(404, "There is nothing here")
}
