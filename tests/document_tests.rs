//! Integration tests for document clients: positions, templates, export
//! and new-document templates, plus dictionaries and company settings.

mod common;

use common::{api_path, meta, page, token_api};
use moysklad_api::entities::{
    CashOut, CustomEntity, CustomEntityElement, DocumentPosition, Loss, PricelistCell,
    PricelistRow, Product, Store,
};
use moysklad_api::prelude::*;
use moysklad_api::responses::{ExportExtension, Template};
use moysklad_api::ApiClientError;
use serde_json::{json, Value};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn loss_template() -> Template {
    Template {
        meta: Some(moysklad_api::entities::Meta::new(
            "https://api.moysklad.ru/api/remap/1.2/entity/loss/metadata/embeddedtemplate/t1",
            "embeddedtemplate",
        )),
        id: Some("t1".to_string()),
        name: Some("Loss act".to_string()),
        ..Template::default()
    }
}

// ============================================================================
// Positions
// ============================================================================

#[tokio::test]
async fn test_loss_positions_lifecycle() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(api_path("/entity/loss/l1/positions")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "meta": meta("lossposition", "p1"),
            "id": "p1",
            "quantity": 2.0,
            "price": 1500.0,
            "assortment": {"meta": meta("product", "prod1")}
        }])))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(api_path("/entity/loss/l1/positions")))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            "lossposition",
            1,
            0,
            1000,
            vec![json!({
                "id": "p1",
                "quantity": 2.0,
                "assortment": {"meta": meta("product", "prod1")}
            })],
        )))
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path(api_path("/entity/loss/l1/positions/p1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "p1",
            "quantity": 5.0,
            "price": 1500.0,
            "reason": "Expired"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path(api_path("/entity/loss/l1/positions/p1")))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let api = token_api(&server);
    let client = api.entity().loss();

    let mut position = DocumentPosition::new(Product::with_id("prod1"), 2.0, 1500.0);
    client.create_position("l1", &mut position).await.unwrap();
    assert_eq!(position.id.as_deref(), Some("p1"));

    let positions = client.get_positions("l1", &[]).await.unwrap();
    assert_eq!(positions.total(), Some(1));
    assert_eq!(
        positions.rows[0].assortment.as_ref().and_then(|a| a.id()),
        Some("prod1")
    );

    position.quantity = Some(5.0);
    position.reason = Some("Expired".to_string());
    client.update_position("l1", "p1", &mut position).await.unwrap();
    assert_eq!(position.quantity, Some(5.0));

    client.delete_position("l1", "p1").await.unwrap();
}

#[tokio::test]
async fn test_pricelist_rows_are_positions() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(api_path("/entity/pricelist/pl1/positions")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "r1", "cells": [{"column": "Retail", "sum": 1000.0}]},
            {"id": "r2", "cells": [{"column": "Retail", "sum": 2000.0}]}
        ])))
        .mount(&server)
        .await;

    let api = token_api(&server);
    let mut rows = vec![
        PricelistRow::new(Product::with_id("a"), vec![PricelistCell::new("Retail", 1000.0)]),
        PricelistRow::new(Product::with_id("b"), vec![PricelistCell::new("Retail", 2000.0)]),
    ];
    api.entity()
        .pricelist()
        .create_positions("pl1", &mut rows)
        .await
        .unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].id.as_deref(), Some("r2"));

    let requests = server.received_requests().await.unwrap();
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body[0]["assortment"]["meta"]["type"], "product");
    assert_eq!(body[1]["cells"][0]["sum"], 2000.0);
}

// ============================================================================
// New document templates
// ============================================================================

#[tokio::test]
async fn test_new_document_sends_empty_object() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path(api_path("/entity/cashout/new")))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "moment": "2024-05-06 10:00:00.000",
            "applicable": true,
            "sum": 0.0,
            "organization": {"meta": meta("organization", "o1")}
        })))
        .mount(&server)
        .await;

    let api = token_api(&server);
    let cash_out: CashOut = api.entity().cash_out().new_document().await.unwrap();

    assert!(cash_out.id.is_none());
    assert_eq!(cash_out.applicable, Some(true));
    assert!(cash_out.moment.is_some());
}

#[tokio::test]
async fn test_new_document_from_partial() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path(api_path("/entity/loss/new")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "store": {"meta": meta("store", "s1")},
            "applicable": true
        })))
        .mount(&server)
        .await;

    let api = token_api(&server);
    let partial = Loss {
        store: Some(Store::with_id("s1")),
        ..Loss::default()
    };
    let loss: Loss = api
        .entity()
        .loss()
        .new_document_from(&partial)
        .await
        .unwrap();

    assert_eq!(loss.store, Some(Store::with_id("s1")));

    let requests = server.received_requests().await.unwrap();
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["store"]["meta"]["type"], "store");
}

// ============================================================================
// Export
// ============================================================================

#[tokio::test]
async fn test_list_embedded_templates() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(api_path("/entity/loss/metadata/embeddedtemplate")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": {"href": "x", "type": "embeddedtemplate", "size": 1, "limit": 100, "offset": 0},
            "rows": [{
                "meta": {
                    "href": "https://api.moysklad.ru/api/remap/1.2/entity/loss/metadata/embeddedtemplate/t1",
                    "type": "embeddedtemplate"
                },
                "id": "t1",
                "name": "Loss act",
                "type": "entity"
            }]
        })))
        .mount(&server)
        .await;

    let api = token_api(&server);
    let templates = api.entity().loss().embedded_templates().await.unwrap();

    assert_eq!(templates.rows.len(), 1);
    assert_eq!(templates.rows[0].name.as_deref(), Some("Loss act"));
}

#[tokio::test]
async fn test_export_to_file() {
    let server = MockServer::start().await;
    let pdf = b"%PDF-1.4 test".to_vec();

    Mock::given(method("POST"))
        .and(path(api_path("/entity/loss/l1/export/")))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "application/pdf")
                .set_body_bytes(pdf.clone()),
        )
        .expect(1)
        .mount(&server)
        .await;

    let api = token_api(&server);
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("l1.pdf");

    api.entity()
        .loss()
        .export_to_file("l1", &loss_template(), ExportExtension::Pdf, &target)
        .await
        .unwrap();

    assert_eq!(std::fs::read(&target).unwrap(), pdf);

    let requests = server.received_requests().await.unwrap();
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["extension"], "pdf");
    assert_eq!(body["template"]["meta"]["type"], "embeddedtemplate");
}

#[tokio::test]
async fn test_export_requires_template_meta() {
    let server = MockServer::start().await;
    let api = token_api(&server);

    let result = api
        .entity()
        .cash_out()
        .export("c1", &Template::default(), ExportExtension::Xls)
        .await;

    assert!(matches!(result, Err(ApiClientError::InvalidRequest(_))));
}

// ============================================================================
// Dictionaries and settings
// ============================================================================

#[tokio::test]
async fn test_custom_entity_elements() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(api_path("/entity/customentity/")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": meta("customentity", "d1"),
            "id": "d1",
            "name": "Colors"
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(api_path("/entity/customentity/d1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": {
                "href": "https://api.moysklad.ru/api/remap/1.2/entity/customentity/d1/e1",
                "type": "customentity"
            },
            "id": "e1",
            "name": "Red"
        })))
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path(api_path("/entity/customentity/d1/e1")))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let api = token_api(&server);
    let client = api.entity().custom_entity();

    let mut dictionary = CustomEntity {
        name: Some("Colors".to_string()),
        ..CustomEntity::default()
    };
    client.create(&mut dictionary).await.unwrap();
    let dictionary_id = dictionary.id.clone().unwrap();

    let mut element = CustomEntityElement {
        name: Some("Red".to_string()),
        ..CustomEntityElement::default()
    };
    client.create_element(&dictionary_id, &mut element).await.unwrap();

    assert_eq!(element.id.as_deref(), Some("e1"));
    assert_eq!(element.dictionary_id(), Some("d1"));

    client.delete_element(&dictionary_id, "e1").await.unwrap();
}

#[tokio::test]
async fn test_company_settings_and_metadata() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(api_path("/context/companysettings/")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": {
                "href": "https://api.moysklad.ru/api/remap/1.2/context/companysettings",
                "type": "companysettings"
            },
            "currency": {"meta": meta("currency", "rub")},
            "priceTypes": [{"id": "pt1", "name": "Цена продажи", "externalCode": "cbcf493b"}],
            "discountStrategy": "bySum",
            "checkMinPrice": true
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(api_path("/context/companysettings/metadata")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": {"href": "x", "mediaType": "application/json"},
            "customEntities": [{"meta": meta("customentity", "d1"), "name": "Colors"}],
            "createShared": false
        })))
        .mount(&server)
        .await;

    let api = token_api(&server);
    let client = api.context().company_settings();

    let settings = client.get().await.unwrap();
    assert_eq!(settings.discount_strategy.as_deref(), Some("bySum"));
    assert_eq!(settings.price_types.unwrap()[0].name.as_deref(), Some("Цена продажи"));
    assert_eq!(settings.currency.and_then(|c| c.id().map(str::to_owned)).as_deref(), Some("rub"));

    let metadata = client.metadata().await.unwrap();
    let dictionaries = metadata.custom_entities.unwrap();
    assert_eq!(dictionaries[0].id(), Some("d1"));
}
