//! Dispatch container wiring state to its collaborators.
//!
//! [`Store`] owns the [`AppState`] together with an injected [`CatalogClient`]
//! and [`Storage`]. Every mutation goes through [`Store::dispatch`], which runs
//! the pure event handler and then executes the resulting actions:
//!
//! - favorites writes happen synchronously, before `dispatch` returns; failures
//!   are logged and swallowed
//! - fetches run on spawned tokio tasks and come back through a channel as
//!   [`Event::FetchSettled`], applied by [`Store::next`]
//!
//! Search keystrokes go through a [`Debouncer`]; `next` also wakes up when its
//! deadline passes and dispatches the committed query.
//!
//! Fetch spawning requires a tokio runtime: call `dispatch` from async code.

use crate::api::CatalogClient;
use crate::app::debounce::{Debouncer, DEFAULT_DELAY};
use crate::app::{handle_event, Action, AppState, Event};
use crate::domain::{Character, FavoriteColor};
use crate::storage::{favorites, Storage};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::Instant;

/// State container with injected catalog client and storage.
pub struct Store<C, S> {
    state: AppState,
    client: Arc<C>,
    storage: S,
    debouncer: Debouncer<String>,
    settled_tx: mpsc::UnboundedSender<Event>,
    settled_rx: mpsc::UnboundedReceiver<Event>,
    in_flight: usize,
}

impl<C, S> Store<C, S>
where
    C: CatalogClient + 'static,
    S: Storage,
{
    /// Creates a store, hydrating favorites from `storage`.
    pub fn new(client: Arc<C>, storage: S) -> Self {
        let favorites = favorites::hydrate(&storage);
        let (settled_tx, settled_rx) = mpsc::unbounded_channel();

        Self {
            state: AppState::new(favorites),
            client,
            storage,
            debouncer: Debouncer::new(DEFAULT_DELAY),
            settled_tx,
            settled_rx,
            in_flight: 0,
        }
    }

    /// Sets the search debounce window.
    #[must_use]
    pub fn with_debounce(mut self, delay: Duration) -> Self {
        self.debouncer = Debouncer::new(delay);
        self
    }

    /// Sets page size and pager spread used by the view models.
    #[must_use]
    pub fn with_layout(mut self, page_size: u32, page_spread: u32) -> Self {
        self.state = self.state.with_layout(page_size, page_spread);
        self
    }

    /// Read-only snapshot of the application state.
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    #[must_use]
    pub fn client(&self) -> &Arc<C> {
        &self.client
    }

    /// Number of fetches whose results have not been applied yet.
    #[must_use]
    pub const fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Whether [`next`](Self::next) has anything to wait for.
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.in_flight > 0 || self.debouncer.is_pending()
    }

    /// Handles one event and executes its actions. Returns whether the view
    /// changed.
    pub fn dispatch(&mut self, event: Event) -> bool {
        let (render, actions) = handle_event(&mut self.state, &event);
        for action in actions {
            self.execute(action);
        }
        render
    }

    fn execute(&mut self, action: Action) {
        match action {
            Action::Fetch(request) => {
                let client = Arc::clone(&self.client);
                let tx = self.settled_tx.clone();
                self.in_flight += 1;

                tokio::spawn(async move {
                    let result = match request.query.as_deref() {
                        Some(name) => client.search_page(name, request.page).await,
                        None => client.list_page(request.page).await,
                    };
                    if tx.send(Event::FetchSettled { request, result }).is_err() {
                        tracing::debug!("store dropped before fetch settled");
                    }
                });
            }
            Action::PersistFavorites(characters) => {
                if let Err(e) = favorites::save_favorites(&mut self.storage, &characters) {
                    tracing::warn!(error = %e, count = characters.len(), "failed to persist favorites");
                }
            }
            Action::PersistColor(color) => {
                if let Err(e) = favorites::save_color(&mut self.storage, color) {
                    tracing::warn!(error = %e, color = %color, "failed to persist favorite color");
                }
            }
        }
    }

    /// Waits for the next fetch result or debounced search and applies it.
    ///
    /// Returns `None` immediately when nothing is pending, otherwise whether
    /// the view changed.
    pub async fn next(&mut self) -> Option<bool> {
        if !self.is_busy() {
            return None;
        }

        let deadline = self.debouncer.deadline();
        let waiting_fetch = self.in_flight > 0;
        let debounce = async move {
            match deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            Some(event) = self.settled_rx.recv(), if waiting_fetch => {
                self.in_flight = self.in_flight.saturating_sub(1);
                Some(self.dispatch(event))
            }
            () = debounce, if deadline.is_some() => {
                let committed = self.debouncer.poll(Instant::now());
                Some(committed.is_some_and(|query| {
                    tracing::debug!(query = %query, "search input settled");
                    self.dispatch(Event::Search(query))
                }))
            }
            else => None,
        }
    }

    /// Applies pending work until nothing is in flight or debouncing.
    pub async fn settle(&mut self) {
        while self.next().await.is_some() {}
    }

    /// Feeds one raw search input value into the debouncer.
    pub fn input_search(&mut self, text: impl Into<String>) {
        self.debouncer.push(text.into(), Instant::now());
    }

    /// Drops a debounced search that has not been committed yet.
    pub fn cancel_search(&mut self) {
        self.debouncer.cancel();
    }

    pub fn load_initial(&mut self) -> bool {
        self.dispatch(Event::LoadInitial)
    }

    /// Sets the query and fetches its first page, bypassing the debouncer.
    pub fn search(&mut self, query: impl Into<String>) -> bool {
        self.debouncer.cancel();
        self.dispatch(Event::Search(query.into()))
    }

    pub fn go_to_page(&mut self, page: u32) -> bool {
        self.dispatch(Event::GoToPage(page))
    }

    pub fn next_page(&mut self) -> bool {
        self.dispatch(Event::NextPage)
    }

    pub fn previous_page(&mut self) -> bool {
        self.dispatch(Event::PreviousPage)
    }

    pub fn refresh(&mut self) -> bool {
        self.dispatch(Event::Refresh)
    }

    pub fn fetch_page(&mut self, page: u32) -> bool {
        self.dispatch(Event::FetchPage(page))
    }

    pub fn toggle_favorite(&mut self, character: Character) -> bool {
        self.dispatch(Event::ToggleFavorite(character))
    }

    pub fn add_to_favorites(&mut self, character: Character) -> bool {
        self.dispatch(Event::AddFavorite(character))
    }

    pub fn remove_from_favorites(&mut self, character: Character) -> bool {
        self.dispatch(Event::RemoveFavorite(character))
    }

    pub fn clear_favorites(&mut self) -> bool {
        self.dispatch(Event::ClearFavorites)
    }

    pub fn set_favorite_color(&mut self, color: FavoriteColor) -> bool {
        self.dispatch(Event::SetFavoriteColor(color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ApiError, CatalogPage, PageInfo};
    use crate::storage::{MemoryStorage, COLOR_KEY, FAVORITES_KEY};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Answers every request with a one-page result named after the request.
    #[derive(Default)]
    struct EchoClient {
        calls: Mutex<Vec<(Option<String>, u32)>>,
    }

    #[async_trait]
    impl CatalogClient for EchoClient {
        async fn list_page(&self, page: u32) -> Result<CatalogPage, ApiError> {
            self.calls.lock().unwrap().push((None, page));
            Ok(one(page, "listing"))
        }

        async fn search_page(&self, name: &str, page: u32) -> Result<CatalogPage, ApiError> {
            self.calls.lock().unwrap().push((Some(name.to_string()), page));
            Ok(one(page, name))
        }
    }

    fn one(page: u32, name: &str) -> CatalogPage {
        CatalogPage {
            info: PageInfo {
                count: 100,
                pages: 5,
                next: None,
                prev: None,
            },
            results: vec![Character::new(page, name)],
        }
    }

    fn store(storage: MemoryStorage) -> Store<EchoClient, MemoryStorage> {
        Store::new(Arc::new(EchoClient::default()), storage)
    }

    #[tokio::test]
    async fn dispatch_is_non_blocking_and_next_applies_result() {
        let mut store = store(MemoryStorage::new());
        assert!(store.load_initial());
        assert!(store.state().catalog.loading());
        assert_eq!(store.in_flight(), 1);

        assert_eq!(store.next().await, Some(true));
        assert!(!store.state().catalog.loading());
        assert_eq!(store.state().catalog.characters()[0].name, "listing");
        assert_eq!(store.next().await, None);
    }

    #[tokio::test]
    async fn search_routes_to_search_endpoint() {
        let mut store = store(MemoryStorage::new());
        store.search("rick");
        store.settle().await;

        let calls = store.client().calls.lock().unwrap().clone();
        assert_eq!(calls, vec![(Some("rick".to_string()), 1)]);
    }

    #[tokio::test]
    async fn favorites_hydrate_and_write_through() {
        let mut storage = MemoryStorage::new();
        favorites::save_favorites(&mut storage, &[Character::new(1, "Rick")]).unwrap();
        storage.set(COLOR_KEY, "green").unwrap();

        let mut store = store(storage);
        assert!(store.state().favorites.contains(1));
        assert_eq!(store.state().favorites.color(), FavoriteColor::Green);

        store.toggle_favorite(Character::new(2, "Morty"));
        store.set_favorite_color(FavoriteColor::Blue);

        assert_eq!(
            favorites::load_favorites(store.storage()),
            vec![Character::new(1, "Rick"), Character::new(2, "Morty")]
        );
        assert_eq!(
            store.storage().get(COLOR_KEY).unwrap().as_deref(),
            Some("blue")
        );
    }

    #[tokio::test]
    async fn storage_failures_do_not_block_mutations() {
        let mut store = store(MemoryStorage::failing());
        assert!(store.toggle_favorite(Character::new(1, "Rick")));
        assert!(store.state().favorites.contains(1));
        assert_eq!(store.storage().get(FAVORITES_KEY).unwrap(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn debounced_input_commits_last_value() {
        let mut store = store(MemoryStorage::new());
        store.input_search("r");
        tokio::time::advance(Duration::from_millis(100)).await;
        store.input_search("ri");
        assert!(store.is_busy());

        store.settle().await;

        let calls = store.client().calls.lock().unwrap().clone();
        assert_eq!(calls, vec![(Some("ri".to_string()), 1)]);
        assert_eq!(store.state().catalog.search_query(), "ri");
    }

    #[tokio::test]
    async fn cancelled_input_never_commits() {
        let mut store = store(MemoryStorage::new()).with_debounce(Duration::from_millis(10));
        store.input_search("summer");
        store.cancel_search();
        assert!(!store.is_busy());
        assert_eq!(store.next().await, None);
        assert!(store.client().calls.lock().unwrap().is_empty());
    }
}
