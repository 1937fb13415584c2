mod common;

use common::{not_found, page, MockCatalogClient};
use rickdex::app::Store;
use rickdex::domain::{ApiError, Character, FavoriteColor};
use rickdex::storage::{JsonStorage, MemoryStorage};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

fn memory_store(client: MockCatalogClient) -> Store<MockCatalogClient, MemoryStorage> {
    Store::new(Arc::new(client), MemoryStorage::new())
}

#[tokio::test]
async fn first_page_success_populates_catalog() {
    let client = MockCatalogClient::new();
    client.on_list(1, Ok(page(1, 20, 826, 42)));
    let mut store = memory_store(client);

    store.load_initial();
    assert!(store.state().catalog.loading());
    store.settle().await;

    let catalog = &store.state().catalog;
    assert!(!catalog.loading());
    assert_eq!(catalog.characters().len(), 20);
    assert_eq!(catalog.total_pages(), 42);
    assert_eq!(catalog.total_items(), 826);
    assert_eq!(catalog.current_page(), 1);
    assert!(catalog.error().is_none());

    let pager = store.state().compute_pagination().unwrap();
    assert_eq!(pager.summary.as_deref(), Some("Showing 1-20 of 826 characters"));
}

#[tokio::test]
async fn first_page_not_found_clears_results() {
    let client = MockCatalogClient::new();
    client.on_search("zzz", 1, Err(not_found()));
    let mut store = memory_store(client);

    store.search("zzz");
    store.settle().await;

    let catalog = &store.state().catalog;
    assert!(catalog.characters().is_empty());
    assert_eq!(catalog.error().and_then(|e| e.status), Some(404));
    assert_eq!(catalog.error().map(|e| e.message.as_str()), Some("There is nothing here"));
    assert!(!catalog.loading());
}

#[tokio::test]
async fn later_page_failure_retains_results() {
    let client = MockCatalogClient::new();
    client
        .on_list(1, Ok(page(1, 20, 826, 42)))
        .on_list(3, Err(ApiError::network()));
    let mut store = memory_store(client);

    store.load_initial();
    store.settle().await;
    assert!(store.go_to_page(3));
    store.settle().await;

    let catalog = &store.state().catalog;
    assert_eq!(catalog.characters().len(), 20);
    assert_eq!(catalog.characters()[0].id, 1);
    assert_eq!(catalog.error().and_then(|e| e.status), None);
    assert_eq!(catalog.current_page(), 1);
}

#[tokio::test]
async fn navigation_guards_prevent_requests() {
    let client = MockCatalogClient::new();
    client
        .on_list(1, Ok(page(1, 20, 60, 3)))
        .on_list(2, Ok(page(21, 20, 60, 3)));
    let mut store = memory_store(client);

    store.load_initial();
    store.settle().await;

    assert!(!store.go_to_page(1));
    assert!(!store.go_to_page(4));
    assert!(!store.go_to_page(0));
    assert!(!store.previous_page());

    assert!(store.next_page());
    assert!(!store.next_page(), "blocked while loading");
    store.settle().await;

    assert_eq!(store.state().catalog.current_page(), 2);
    assert_eq!(store.client().calls(), vec![(None, 1), (None, 2)]);
}

#[tokio::test(start_paused = true)]
async fn slow_superseded_response_is_ignored() {
    let client = MockCatalogClient::new();
    client
        .on_list(1, Ok(page(1, 20, 826, 42)))
        .on_list_delayed(2, Duration::from_millis(300), Ok(page(21, 20, 826, 42)))
        .on_search_delayed("rick", 1, Duration::from_millis(50), Ok(page(1, 4, 4, 1)));
    let mut store = memory_store(client);

    store.load_initial();
    store.settle().await;

    assert!(store.go_to_page(2));
    store.search("rick");
    store.settle().await;

    let catalog = &store.state().catalog;
    assert_eq!(catalog.search_query(), "rick");
    assert_eq!(catalog.characters().len(), 4);
    assert_eq!(catalog.total_pages(), 1);
    assert_eq!(catalog.current_page(), 1);
    assert!(!catalog.loading());
    assert_eq!(store.client().calls().len(), 3);
}

#[tokio::test(start_paused = true)]
async fn typing_burst_commits_once_after_quiet_period() {
    let client = MockCatalogClient::new();
    client.on_search("ric", 1, Ok(page(1, 3, 3, 1)));
    let mut store = memory_store(client);
    let start = Instant::now();

    store.input_search("r");
    tokio::time::advance(Duration::from_millis(100)).await;
    store.input_search("ri");
    tokio::time::advance(Duration::from_millis(100)).await;
    store.input_search("ric");

    let early = tokio::time::timeout(Duration::from_millis(499), store.next()).await;
    assert!(early.is_err(), "nothing may commit before the window closes");
    assert!(store.client().calls().is_empty());

    assert_eq!(store.next().await, Some(true));
    let elapsed = start.elapsed();
    assert!(
        elapsed >= Duration::from_millis(700) && elapsed < Duration::from_millis(710),
        "committed at {elapsed:?}"
    );
    assert_eq!(store.client().calls(), vec![(Some("ric".to_string()), 1)]);

    store.settle().await;
    assert_eq!(store.state().catalog.characters().len(), 3);
}

#[tokio::test]
async fn refresh_retries_first_page_of_current_query() {
    let client = MockCatalogClient::new();
    client
        .on_search("morty", 1, Err(ApiError::network()))
        .on_search("morty", 1, Ok(page(2, 5, 5, 1)));
    let mut store = memory_store(client);

    store.search("morty");
    store.settle().await;
    assert!(store.state().catalog.error().is_some());

    store.refresh();
    store.settle().await;

    assert!(store.state().catalog.error().is_none());
    assert_eq!(store.state().catalog.characters().len(), 5);
    assert_eq!(
        store.client().calls(),
        vec![(Some("morty".to_string()), 1), (Some("morty".to_string()), 1)]
    );
}

#[tokio::test]
async fn clearing_search_returns_to_listing() {
    let client = MockCatalogClient::new();
    client
        .on_search("rick", 1, Ok(page(1, 4, 4, 1)))
        .on_list(1, Ok(page(1, 20, 826, 42)));
    let mut store = memory_store(client);

    store.search("rick");
    store.settle().await;
    store.search("");
    store.settle().await;

    assert_eq!(store.state().catalog.total_items(), 826);
    assert_eq!(store.client().calls().last(), Some(&(None, 1)));
}

#[tokio::test]
async fn favorites_survive_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("favorites.json");
    let client = Arc::new(MockCatalogClient::new());

    let expected = vec![
        Character::new(3, "Summer Smith"),
        Character::new(1, "Rick Sanchez"),
        Character::new(5, "Jerry Smith"),
    ];

    {
        let mut store = Store::new(Arc::clone(&client), JsonStorage::open(path.clone()).unwrap());
        store.add_to_favorites(Character::new(3, "Summer Smith"));
        store.toggle_favorite(Character::new(1, "Rick Sanchez"));
        store.toggle_favorite(Character::new(2, "Morty Smith"));
        store.toggle_favorite(Character::new(2, "Morty Smith"));
        store.add_to_favorites(Character::new(5, "Jerry Smith"));
        store.set_favorite_color(FavoriteColor::Green);
    }

    let store = Store::new(client, JsonStorage::open(path).unwrap());
    assert_eq!(store.state().favorites.characters(), expected.as_slice());
    assert_eq!(store.state().favorites.color(), FavoriteColor::Green);
    let ids: Vec<u32> = {
        let mut ids: Vec<u32> = store.state().favorites.ids().iter().copied().collect();
        ids.sort_unstable();
        ids
    };
    assert_eq!(ids, [1, 3, 5]);
}

#[tokio::test]
async fn cleared_favorites_stay_cleared() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("favorites.json");
    let client = Arc::new(MockCatalogClient::new());

    {
        let mut store = Store::new(Arc::clone(&client), JsonStorage::open(path.clone()).unwrap());
        store.add_to_favorites(Character::new(1, "Rick Sanchez"));
        store.clear_favorites();
    }

    let store = Store::new(client, JsonStorage::open(path).unwrap());
    assert!(store.state().favorites.is_empty());
    assert_eq!(store.state().favorites.color(), FavoriteColor::Red);
}
