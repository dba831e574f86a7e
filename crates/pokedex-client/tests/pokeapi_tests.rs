//! Integration tests for [`PokeApiClient`] against a local stand-in API.
//!
//! A small Axum server bound to an ephemeral port serves the same JSON
//! shapes as the public API, which lets the tests exercise real HTTP,
//! status handling, decoding, and timeouts without network access.

#![allow(
    clippy::unwrap_used,
    clippy::indexing_slicing,
    clippy::arithmetic_side_effects
)]

use std::time::Duration;

use axum::Json;
use axum::Router;
use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use pokedex_client::{CatalogSource, ClientConfig, PokeApiClient};
use pokedex_types::{ApiErrorKind, Locator, PokemonId};
use serde_json::{Value, json};

#[derive(Debug, serde::Deserialize)]
struct PageQuery {
    limit: u32,
    offset: u32,
}

fn record(id: u32, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "height": 4,
        "weight": 60,
        "base_experience": 112,
        "sprites": {
            "front_default": format!("https://img/{id}.png"),
            "other": { "official-artwork": { "front_default": null } }
        },
        "types": [{ "slot": 1, "type": { "name": "electric", "url": "u" } }],
        "stats": [{ "base_stat": 35, "effort": 0, "stat": { "name": "hp", "url": "u" } }],
        "abilities": []
    })
}

const NAMES: [&str; 3] = ["bulbasaur", "ivysaur", "venusaur"];

async fn list(Query(query): Query<PageQuery>) -> Json<Value> {
    let results: Vec<Value> = NAMES
        .iter()
        .enumerate()
        .skip(query.offset as usize)
        .take(query.limit as usize)
        .map(|(index, name)| {
            json!({
                "name": name,
                "url": format!("http://stand-in/api/v2/pokemon/{}/", index + 1),
            })
        })
        .collect();
    let end = (query.offset + query.limit) as usize;
    let next = (end < NAMES.len()).then(|| format!("http://stand-in/api/v2/pokemon?offset={end}"));
    Json(json!({
        "count": NAMES.len(),
        "next": next,
        "previous": null,
        "results": results,
    }))
}

async fn detail(Path(locator): Path<String>) -> Response {
    match locator.as_str() {
        "1" | "bulbasaur" => Json(record(1, "bulbasaur")).into_response(),
        "2" | "ivysaur" => Json(record(2, "ivysaur")).into_response(),
        "3" | "venusaur" => Json(record(3, "venusaur")).into_response(),
        "25" | "pikachu" => Json(record(25, "pikachu")).into_response(),
        "missingno" => (StatusCode::OK, "{\"id\": \"not a number\"}").into_response(),
        "error" => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "message": "upstream exploded" })),
        )
            .into_response(),
        "slowpoke" => {
            tokio::time::sleep(Duration::from_secs(2)).await;
            Json(record(79, "slowpoke")).into_response()
        }
        _ => (StatusCode::NOT_FOUND, "Not Found").into_response(),
    }
}

/// Serve the stand-in API and return a client pointed at it.
async fn spawn_stand_in(timeout: Duration) -> PokeApiClient {
    let router = Router::new()
        .route("/api/v2/pokemon", get(list))
        .route("/api/v2/pokemon/{locator}", get(detail));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    let config = ClientConfig::new(format!("http://{addr}/api/v2")).with_timeout(timeout);
    PokeApiClient::new(&config).unwrap()
}

#[tokio::test]
async fn fetch_page_projects_entries_and_next() {
    let client = spawn_stand_in(Duration::from_secs(5)).await;

    let page = client.fetch_page(2, 0).await.unwrap();
    assert_eq!(page.total_count, 3);
    assert!(page.has_next);
    assert_eq!(page.entries.len(), 2);
    assert_eq!(page.entries[0].name, "bulbasaur");
    assert_eq!(page.entries[1].locator, Locator::Id(PokemonId(2)));

    let last = client.fetch_page(2, 2).await.unwrap();
    assert!(!last.has_next);
    assert_eq!(last.entries.len(), 1);
}

#[tokio::test]
async fn fetch_by_name_is_case_insensitive() {
    let client = spawn_stand_in(Duration::from_secs(5)).await;

    let upper = client.fetch_by_name("Pikachu").await.unwrap();
    let lower = client.fetch_by_name("pikachu").await.unwrap();
    assert_eq!(upper, lower);
    assert_eq!(upper.id, PokemonId(25));
}

#[tokio::test]
async fn unknown_name_is_not_found() {
    let client = spawn_stand_in(Duration::from_secs(5)).await;

    let err = client.fetch_by_name("agumon").await.unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::NotFound);
    assert_eq!(err.status, Some(404));
    assert_eq!(err.message, "Request failed with status code 404");
}

#[tokio::test]
async fn empty_name_fails_without_request() {
    let client = spawn_stand_in(Duration::from_secs(5)).await;

    let err = client.fetch_by_name("   ").await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.status, None);
}

#[tokio::test]
async fn malformed_body_is_decode_error() {
    let client = spawn_stand_in(Duration::from_secs(5)).await;

    let err = client
        .fetch_detail(&Locator::Name("missingno".to_owned()))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::Decode);
}

#[tokio::test]
async fn server_error_uses_body_message() {
    let client = spawn_stand_in(Duration::from_secs(5)).await;

    let err = client
        .fetch_detail(&Locator::Name("error".to_owned()))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::Network);
    assert_eq!(err.status, Some(500));
    assert_eq!(err.message, "upstream exploded");
}

#[tokio::test]
async fn timeout_is_network_error() {
    let client = spawn_stand_in(Duration::from_millis(100)).await;

    let err = client.fetch_by_name("slowpoke").await.unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::Network);
    assert_eq!(err.message, "request timed out");
}

#[tokio::test]
async fn fetch_many_preserves_order_and_fails_as_a_batch() {
    let client = spawn_stand_in(Duration::from_secs(5)).await;

    let locators = [
        Locator::Id(PokemonId(3)),
        Locator::Id(PokemonId(1)),
        Locator::Name("ivysaur".to_owned()),
    ];
    let records = client.fetch_many(&locators).await.unwrap();
    let ids: Vec<u32> = records.iter().map(|r| r.id.into_inner()).collect();
    assert_eq!(ids, vec![3, 1, 2]);

    let with_missing = [Locator::Id(PokemonId(1)), Locator::Name("agumon".to_owned())];
    assert!(client.fetch_many(&with_missing).await.is_err());
}

#[tokio::test]
async fn unreachable_host_is_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = ClientConfig::new(format!("http://{addr}/api/v2"));
    let client = PokeApiClient::new(&config).unwrap();
    let err = client.fetch_page(20, 0).await.unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::Network);
    assert_eq!(err.status, None);
}
