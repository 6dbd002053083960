#![allow(dead_code)]

use axum::{Router, routing::post};
use axum_test::TestServer;
use serde_json::{Value, json};
use tax_calculation_api::api::handlers::calculate_tax_handler;
use tax_calculation_api::config::Config;
use tax_calculation_api::routes::app_router;
use tax_calculation_api::state::AppState;

pub fn create_test_state() -> AppState {
    AppState::default()
}

/// Configuration for the full router, with rate limiting off (no peer address in tests).
pub fn test_config() -> Config {
    Config {
        rate_limit_enabled: false,
        ..Config::default()
    }
}

pub fn calculate_server() -> TestServer {
    let app = Router::new()
        .route("/api/v1/calculate-tax", post(calculate_tax_handler))
        .with_state(create_test_state());

    TestServer::new(app).unwrap()
}

pub fn full_server() -> TestServer {
    let app = app_router(create_test_state(), &test_config()).unwrap();
    TestServer::new(app).unwrap()
}

pub fn address(state: &str, zipcode: &str) -> Value {
    json!({
        "street": "123 Main St",
        "city": "Springfield",
        "state": state,
        "country": "US",
        "zipcode": zipcode
    })
}

pub fn item(id: &str, price: f64, quantity: i64) -> Value {
    json!({
        "id": id,
        "name": format!("Product {id}"),
        "price": price,
        "quantity": quantity
    })
}
