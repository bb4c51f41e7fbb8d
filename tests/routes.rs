use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use async_trait::async_trait;
use card_index::catalog::{CatalogError, CatalogReader, CatalogResult};
use card_index::domain::card::{Card, CardQuery};
use card_index::domain::types::CardId;
use card_index::models::browse::BrowseSettings;
use card_index::routes::api::api_v1_cards;
use card_index::routes::cards::show_card;
use card_index::routes::main::show_index;
use tera::Tera;

/// Returns a full page of generated cards, or fails every request.
struct StubCatalog {
    failing: bool,
}

fn card(id: &str, name: &str) -> Card {
    Card {
        id: id.to_string(),
        name: name.to_string(),
        image_url: Some(format!("https://img.example/{id}.png")),
        type_line: Some("Creature".to_string()),
        power: Some("2".to_string()),
        toughness: Some("3".to_string()),
        ..Card::default()
    }
}

fn unavailable() -> CatalogError {
    CatalogError::Status {
        status: 503,
        reason: "Service Unavailable".to_string(),
    }
}

#[async_trait]
impl CatalogReader for StubCatalog {
    async fn list_cards(&self, query: &CardQuery) -> CatalogResult<Vec<Card>> {
        if self.failing {
            return Err(unavailable());
        }
        let first = (query.page - 1) * query.page_size + 1;
        Ok((first..first + query.page_size)
            .map(|n| card(&format!("card-{n}"), &format!("Card {n}")))
            .collect())
    }

    async fn get_card(&self, id: &CardId) -> CatalogResult<Card> {
        if self.failing {
            return Err(unavailable());
        }
        match id.as_str() {
            "missing" => Err(CatalogError::NotFound),
            other => Ok(card(other, "Grizzly Bears")),
        }
    }
}

fn tera() -> Tera {
    Tera::new(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/**/*")).expect("templates")
}

macro_rules! app {
    ($failing:expr) => {{
        let catalog: Arc<dyn CatalogReader> = Arc::new(StubCatalog { failing: $failing });
        test::init_service(
            App::new()
                .app_data(web::Data::from(catalog))
                .app_data(web::Data::new(tera()))
                .app_data(web::Data::new(BrowseSettings::default()))
                .service(web::scope("/api").service(api_v1_cards))
                .service(show_index)
                .service(show_card),
        )
        .await
    }};
}

macro_rules! get_text {
    ($app:expr, $uri:expr) => {{
        let response =
            test::call_service(&$app, test::TestRequest::get().uri($uri).to_request()).await;
        let status = response.status();
        let body = test::read_body(response).await;
        (status, String::from_utf8_lossy(&body).into_owned())
    }};
}

#[actix_web::test]
async fn index_renders_grid_pagination_and_page_size_selector() {
    let app = app!(false);
    let (status, body) = get_text!(app, "/?page=2&pageSize=10");

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"data-cy="card-grid""#));
    assert_eq!(body.matches(r#"data-cy="card""#).count(), 10);
    assert!(body.contains("Card 11"));
    assert!(body.contains("Showing 11-20 of 300 results"));
    assert!(body.contains(r#"data-cy="pagination-container""#));
    assert!(body.contains(r#"aria-label="Go to previous page""#));
    assert!(body.contains(r#"aria-current="page">2<"#));
    assert!(body.contains(r#"role="listbox""#));
    assert_eq!(body.matches(r#"role="option""#).count(), 4);
    assert!(body.contains(r#"aria-label="Close filters""#));
}

#[actix_web::test]
async fn index_clamps_out_of_range_pages() {
    let app = app!(false);
    let (status, body) = get_text!(app, "/?page=999&pageSize=50");

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Showing 251-300 of 300 results"));
    assert!(body.contains("Card 251"));
}

#[actix_web::test]
async fn index_shows_error_banner_when_catalog_fails() {
    let app = app!(true);
    let (status, body) = get_text!(app, "/");

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Error loading cards"));
    assert!(body.contains("No cards found."));
    assert!(!body.contains(r#"data-cy="pagination-container""#));
    assert!(!body.contains(r#"data-cy="pagination-info""#));
}

#[actix_web::test]
async fn card_page_shows_details() {
    let app = app!(false);
    let (status, body) = get_text!(app, "/cards/abc-1");

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Grizzly Bears"));
    assert!(body.contains("2/3") || body.contains("2&#x2F;3"));
}

#[actix_web::test]
async fn unknown_or_malformed_cards_are_not_found() {
    let app = app!(false);

    let (status, body) = get_text!(app, "/cards/missing");
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains(r#"data-cy="not-found""#));

    let (status, _) = get_text!(app, "/cards/not%20valid");
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn card_page_reports_catalog_failure() {
    let app = app!(true);
    let (status, body) = get_text!(app, "/cards/abc");

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body.contains("Error loading card"));
}

#[actix_web::test]
async fn api_returns_page_with_metadata() {
    let app = app!(false);
    let request = test::TestRequest::get()
        .uri("/api/v1/cards?page=3&pageSize=20&colors=Red&colors=Green")
        .to_request();
    let json: serde_json::Value = test::call_and_read_body_json(&app, request).await;

    assert_eq!(json["page"], 3);
    assert_eq!(json["pageSize"], 20);
    assert_eq!(json["totalPages"], 15);
    assert_eq!(json["pages"], serde_json::json!([1, 2, 3, 4, 5]));
    assert_eq!(json["itemRange"]["startItem"], 41);
    assert_eq!(json["itemRange"]["endItem"], 60);
    assert_eq!(json["state"]["isFirstPage"], false);
    assert_eq!(json["state"]["showFirstButton"], true);
    assert_eq!(json["cards"].as_array().map(Vec::len), Some(20));
}

#[actix_web::test]
async fn api_reports_catalog_failure_as_bad_gateway() {
    let app = app!(true);
    let response = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/v1/cards").to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let json: serde_json::Value = test::read_body_json(response).await;
    assert!(json["error"].as_str().unwrap_or_default().contains("503"));
}

#[actix_web::test]
async fn api_rejects_invalid_filters() {
    let app = app!(false);
    let uri = format!("/api/v1/cards?set={}", "x".repeat(40));
    let response = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
