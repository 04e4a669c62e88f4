//! Shared helpers for integration tests.

#![allow(dead_code)]

use moysklad_api::{AccessToken, ApiConfig, Credentials, HostUrl, Login, MoySkladApi, Password};
use serde_json::{json, Value};
use wiremock::MockServer;

pub const API_PREFIX: &str = "/api/remap/1.2";

/// Creates an API pointed at the mock server, authenticated with a token.
pub fn token_api(server: &MockServer) -> MoySkladApi {
    let config = ApiConfig::builder()
        .credentials(Credentials::token(AccessToken::new("test-token").unwrap()))
        .host(HostUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    MoySkladApi::new(config).unwrap()
}

/// Creates an API pointed at the mock server, authenticated with a login.
pub fn basic_api(server: &MockServer) -> MoySkladApi {
    let config = ApiConfig::builder()
        .credentials(Credentials::basic(
            Login::new("admin@test").unwrap(),
            Password::new("secret").unwrap(),
        ))
        .host(HostUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    MoySkladApi::new(config).unwrap()
}

/// Full mock path for an API path.
pub fn api_path(path: &str) -> String {
    format!("{API_PREFIX}{path}")
}

/// A meta object as the server returns it.
pub fn meta(entity_type: &str, id: &str) -> Value {
    json!({
        "href": format!("https://api.moysklad.ru/api/remap/1.2/entity/{entity_type}/{id}"),
        "metadataHref": format!("https://api.moysklad.ru/api/remap/1.2/entity/{entity_type}/metadata"),
        "type": entity_type,
        "mediaType": "application/json"
    })
}

/// A collection page as the server returns it.
pub fn page(entity_type: &str, size: u32, offset: u32, limit: u32, rows: Vec<Value>) -> Value {
    json!({
        "meta": {
            "href": format!("https://api.moysklad.ru/api/remap/1.2/entity/{entity_type}"),
            "type": entity_type,
            "mediaType": "application/json",
            "size": size,
            "limit": limit,
            "offset": offset
        },
        "rows": rows
    })
}
