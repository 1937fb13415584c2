use rickdex::api::{CatalogClient, HttpCatalogClient};
use rickdex::app::Store;
use rickdex::domain::error::{GENERIC_ERROR_MESSAGE, NETWORK_ERROR_MESSAGE};
use rickdex::storage::MemoryStorage;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const PAGE_JSON: &str = r#"{
    "info": {"count": 2, "pages": 1, "next": null, "prev": null},
    "results": [
        {"id": 1, "name": "Rick Sanchez", "status": "Alive", "species": "Human", "type": "",
         "gender": "Male", "origin": {"name": "Earth (C-137)", "url": ""},
         "location": {"name": "Citadel of Ricks", "url": ""},
         "image": "https://rickandmortyapi.com/api/character/avatar/1.jpeg",
         "episode": ["https://rickandmortyapi.com/api/episode/1"],
         "url": "https://rickandmortyapi.com/api/character/1", "created": "2017-11-04T18:48:46.250Z"},
        {"id": 2, "name": "Morty Smith", "status": "Alive", "species": "Human", "type": "",
         "gender": "Male", "origin": {"name": "unknown", "url": ""},
         "location": {"name": "Citadel of Ricks", "url": ""},
         "image": "", "episode": [], "url": "", "created": ""}
    ]
}"#;

/// Serves one canned response per connection and records request lines.
async fn serve(responses: Vec<(u16, &'static str)>) -> (String, Arc<Mutex<Vec<String>>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let recorded = Arc::clone(&seen);

    tokio::spawn(async move {
        for (status, body) in responses {
            let (mut socket, _) = listener.accept().await.unwrap();

            let mut buf = vec![0_u8; 8192];
            let mut read = 0;
            loop {
                let n = socket.read(&mut buf[read..]).await.unwrap();
                read += n;
                if n == 0 || buf[..read].windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
            let request = String::from_utf8_lossy(&buf[..read]).to_string();
            let request_line = request.lines().next().unwrap_or_default().to_string();
            recorded.lock().unwrap().push(request_line);

            let reason = match status {
                200 => "OK",
                404 => "Not Found",
                _ => "Internal Server Error",
            };
            let response = format!(
                "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        }
    });

    (format!("http://{addr}/api"), seen)
}

fn client(base: &str) -> HttpCatalogClient {
    // Keep proxy environment variables away from loopback traffic.
    let http = reqwest::Client::builder()
        .no_proxy()
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();
    HttpCatalogClient::with_client(http, base)
}

#[tokio::test]
async fn lists_a_page() {
    let (base, seen) = serve(vec![(200, PAGE_JSON)]).await;

    let page = client(&base).list_page(2).await.unwrap();

    assert_eq!(page.info.count, 2);
    assert_eq!(page.results[0].name, "Rick Sanchez");
    assert_eq!(page.results[0].origin.name, "Earth (C-137)");
    assert_eq!(
        seen.lock().unwrap().as_slice(),
        ["GET /api/character?page=2 HTTP/1.1"]
    );
}

#[tokio::test]
async fn search_encodes_name() {
    let (base, seen) = serve(vec![(200, PAGE_JSON)]).await;

    client(&base).search_page("rick sanchez", 1).await.unwrap();

    assert_eq!(
        seen.lock().unwrap().as_slice(),
        ["GET /api/character/?name=rick+sanchez&page=1 HTTP/1.1"]
    );
}

#[tokio::test]
async fn not_found_carries_server_message() {
    let (base, _) = serve(vec![(404, r#"{"error":"There is nothing here"}"#)]).await;

    let err = client(&base).list_page(99).await.unwrap_err();

    assert_eq!(err.status, Some(404));
    assert_eq!(err.message, "There is nothing here");
}

#[tokio::test]
async fn server_error_without_json_uses_status_text() {
    let (base, _) = serve(vec![(500, "oops")]).await;

    let err = client(&base).list_page(1).await.unwrap_err();

    assert_eq!(err.status, Some(500));
    assert_eq!(err.message, "Request failed with status code 500");
}

#[tokio::test]
async fn malformed_body_is_a_generic_error() {
    let (base, _) = serve(vec![(200, r#"{"info": 3}"#)]).await;

    let err = client(&base).list_page(1).await.unwrap_err();

    assert_eq!(err.status, None);
    assert_eq!(err.message, GENERIC_ERROR_MESSAGE);
}

#[tokio::test]
async fn refused_connection_is_a_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(&format!("http://{addr}/api"))
        .list_page(1)
        .await
        .unwrap_err();

    assert_eq!(err.status, None);
    assert_eq!(err.message, NETWORK_ERROR_MESSAGE);
}

#[tokio::test]
async fn store_over_http_end_to_end() {
    let (base, _) = serve(vec![(200, PAGE_JSON)]).await;
    let mut store = Store::new(Arc::new(client(&base)), MemoryStorage::new());

    store.load_initial();
    store.settle().await;

    let view = store.state().compute_catalog_view();
    assert_eq!(view.cards.len(), 2);
    assert!(view.pagination.is_none());
    assert!(store.state().catalog.error().is_none());
}
