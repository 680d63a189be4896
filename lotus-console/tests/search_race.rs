// lotus-console/tests/search_race.rs
// Debounced product browsing: superseded requests must never overwrite
// newer state, and deletes flow through the process endpoint

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use axum::{
    Json, Router,
    extract::{Query, State},
    response::IntoResponse,
    routing::{get, post},
};
use lotus_client::{ClientConfig, HttpClient};
use lotus_console::{ConsoleError, FormError, ProductBrowser};
use serde_json::{Value, json};

#[derive(Clone, Default)]
struct Fixture {
    hits: Arc<AtomicUsize>,
    deleted: Arc<AtomicBool>,
}

async fn list(
    State(fixture): State<Fixture>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    fixture.hits.fetch_add(1, Ordering::SeqCst);
    let q = params.get("q").cloned().unwrap_or_default();

    // the "slow" query simulates a laggy backend so a newer request can
    // overtake it
    if q == "slow" {
        tokio::time::sleep(Duration::from_millis(300)).await;
    }

    let data = if fixture.deleted.load(Ordering::SeqCst) {
        json!([])
    } else {
        json!([{"id": 1, "name": if q.is_empty() { "Herbal Mask" } else { q.as_str() }}])
    };
    Json(json!({
        "data": data,
        "pagination": {"page": 1, "limit": 50, "total": 1}
    }))
}

async fn detail() -> impl IntoResponse {
    Json(json!({
        "id": 1,
        "name": "Herbal Mask",
        "images": [{"id": 11, "url": "https://cdn.local/a.jpg"}],
        "variances": [
            {"id": 21, "name": "Default", "price": {"id": 31, "amount": 9.0}}
        ]
    }))
}

async fn process(State(fixture): State<Fixture>, Json(body): Json<Value>) -> impl IntoResponse {
    if body["action"] == "delete" {
        fixture.deleted.store(true, Ordering::SeqCst);
    }
    Json(json!({"id": 1, "name": body["name"]}))
}

async fn spawn_fixture() -> (String, Fixture) {
    let fixture = Fixture::default();
    let app = Router::new()
        .route("/api/products", get(list))
        .route("/api/products/1", get(detail))
        .route("/api/products/process", post(process))
        .with_state(fixture.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{}", addr), fixture)
}

fn client_for(base: &str) -> HttpClient {
    ClientConfig::new(base).with_catalog_url(base).build()
}

#[tokio::test]
async fn test_superseded_request_cannot_overwrite_newer_state() {
    let (base, _fixture) = spawn_fixture().await;
    let mut browser = ProductBrowser::new(client_for(&base)).with_debounce(Duration::ZERO);

    let slow = browser.set_query("slow");
    // let the slow request reach the server
    tokio::time::sleep(Duration::from_millis(100)).await;

    let fast = browser.set_query("fast");
    fast.await.unwrap();

    // wait out the slow response; it must be discarded, not applied
    tokio::time::sleep(Duration::from_millis(400)).await;
    slow.await.unwrap();

    let state = browser.state();
    let state = state.read().await;
    assert_eq!(state.products.len(), 1);
    assert_eq!(state.products[0].name, "fast");
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[tokio::test]
async fn test_debounce_coalesces_keystrokes() {
    let (base, fixture) = spawn_fixture().await;
    let mut browser =
        ProductBrowser::new(client_for(&base)).with_debounce(Duration::from_millis(100));

    // three quick keystrokes: only the last query may reach the server
    drop(browser.set_query("l"));
    drop(browser.set_query("lo"));
    let last = browser.set_query("lotus");
    last.await.unwrap();

    assert_eq!(fixture.hits.load(Ordering::SeqCst), 1);

    let state = browser.state();
    let state = state.read().await;
    assert_eq!(state.products[0].name, "lotus");
}

#[tokio::test]
async fn test_delete_flows_through_process_endpoint() {
    let (base, fixture) = spawn_fixture().await;
    let mut browser = ProductBrowser::new(client_for(&base)).with_debounce(Duration::ZERO);

    browser.refresh().await;
    {
        let state = browser.state();
        let state = state.read().await;
        assert_eq!(state.products.len(), 1);
    }

    browser.delete_product(1).await.unwrap();
    assert!(fixture.deleted.load(Ordering::SeqCst));

    let state = browser.state();
    let state = state.read().await;
    assert!(state.products.is_empty(), "list refetched after delete");
}

#[tokio::test]
async fn test_stale_id_delete_is_refused() {
    let (base, fixture) = spawn_fixture().await;
    let mut browser = ProductBrowser::new(client_for(&base)).with_debounce(Duration::ZERO);
    browser.refresh().await;

    let err = browser.delete_product(999).await.unwrap_err();
    assert!(matches!(
        err,
        ConsoleError::Form(FormError::UnknownProduct(999))
    ));
    assert!(!fixture.deleted.load(Ordering::SeqCst), "nothing submitted");
}
