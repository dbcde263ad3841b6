//! Integration tests for the HTTP repositories against a mock server
//!
//! **Coverage:**
//! - Login cookie continuity into later calls, whatever the login body says
//! - Favorites add/remove round trip
//! - Catalogue paging envelope and filter query
//! - Admin multipart car creation
//! - Decode and status error mapping

#![allow(dead_code)]

#[path = "support.rs"]
mod support;

use std::collections::BTreeSet;

use carcatalogue_core::{AdminRepository, AuthRepository, CarRepository, ContractRepository, ProfileRepository};
use carcatalogue_domain::{
    AuthRequest, CatalogueError, CatalogueFilters, ContractState, CreateCarRequest, FileUpload,
    PageRequest,
};
use carcatalogue_infra::{
    HttpAdminRepository, HttpAuthRepository, HttpCarRepository, HttpContractRepository,
    HttpProfileRepository,
};
use serde_json::json;
use support::{authorization, car_item, cookie_header, paged, profile_body, TestSession};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn login_cookie_is_carried_to_profile() {
    let session = TestSession::anonymous().await;
    Mock::given(method("POST"))
        .and(path("/api/auth"))
        .and(body_json(json!({"username": "driver01", "password": "secret1"})))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "access_token=abc; Path=/; HttpOnly"),
        )
        .expect(1)
        .mount(&session.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/profile"))
        .and(header("cookie", "access_token=abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_body()))
        .expect(1)
        .mount(&session.server)
        .await;

    HttpAuthRepository::new(&session.context)
        .login(AuthRequest { username: "driver01".into(), password: "secret1".into() })
        .await
        .unwrap();
    assert_eq!(session.token().await.as_deref(), Some("abc"));

    let profile = HttpProfileRepository::new(&session.context).profile().await.unwrap();
    assert_eq!(profile.full_name(), "Ivan Ivanov");

    let request = &session.requests_to("/api/profile").await[0];
    assert_eq!(authorization(request).as_deref(), Some("Bearer abc"));
    assert_eq!(cookie_header(request).as_deref(), Some("access_token=abc"));
}

#[tokio::test]
async fn login_token_in_body_is_stored() {
    let session = TestSession::anonymous().await;
    Mock::given(method("POST"))
        .and(path("/api/auth"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "jwt-body"})))
        .mount(&session.server)
        .await;

    HttpAuthRepository::new(&session.context)
        .login(AuthRequest { username: "driver01".into(), password: "secret1".into() })
        .await
        .unwrap();

    assert_eq!(session.token().await.as_deref(), Some("jwt-body"));
}

#[tokio::test]
async fn login_message_body_is_ignored_and_cookie_kept() {
    let session = TestSession::anonymous().await;
    Mock::given(method("POST"))
        .and(path("/api/auth"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "access_token=abc; Path=/")
                .set_body_json(json!({"message": "Authenticated"})),
        )
        .expect(1)
        .mount(&session.server)
        .await;

    let result = HttpAuthRepository::new(&session.context)
        .login(AuthRequest { username: "driver01".into(), password: "secret1".into() })
        .await;

    assert_eq!(result, Ok(()));
    assert_eq!(session.token().await.as_deref(), Some("abc"));
}

#[tokio::test]
async fn favorite_added_then_removed_is_gone() {
    let session = TestSession::signed_in("tok").await;
    Mock::given(method("POST"))
        .and(path("/api/cars/favorites/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(car_item(7)))
        .expect(1)
        .mount(&session.server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/cars/favorites/7"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&session.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/cars/favorites"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paged(vec![car_item(3)], 0, 1, 1)))
        .expect(1)
        .mount(&session.server)
        .await;

    let cars = HttpCarRepository::new(&session.context);
    let added = cars.add_favorite(7).await.unwrap();
    assert_eq!(added.id, 7);
    cars.remove_favorite(7).await.unwrap();

    let favorites = cars.favorites(&PageRequest::default()).await.unwrap();
    assert!(favorites.items.iter().all(|car| car.id != 7));
    assert!(!favorites.has_more());
}

#[tokio::test]
async fn catalogue_sends_filters_and_decodes_envelope() {
    let session = TestSession::anonymous().await;
    Mock::given(method("GET"))
        .and(path("/api/car/catalogue"))
        .and(query_param("brand", "BMW"))
        .and(query_param("minYear", "2019"))
        .and(query_param("page", "1"))
        .and(query_param("size", "20"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(paged(vec![car_item(21), car_item(22)], 1, 45, 3)),
        )
        .expect(1)
        .mount(&session.server)
        .await;

    let filters = CatalogueFilters {
        brands: BTreeSet::from(["BMW".to_string()]),
        min_year: Some(2019),
        ..CatalogueFilters::default()
    };
    let page = HttpCarRepository::new(&session.context)
        .catalogue(&filters, &PageRequest::new(1, 20))
        .await
        .unwrap();

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.total_items, 45);
    assert!(page.has_more());
}

#[tokio::test]
async fn price_bounds_never_send_price_range() {
    let session = TestSession::anonymous().await;
    Mock::given(method("GET"))
        .and(path("/api/car/filters/min-max-cell"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"min": 900.0, "max": 12000.0})))
        .mount(&session.server)
        .await;

    let filters = CatalogueFilters { min_price: Some(1000.0), ..CatalogueFilters::default() };
    let bounds = HttpCarRepository::new(&session.context).price_bounds(&filters).await.unwrap();

    assert!((bounds.min - 900.0).abs() < f64::EPSILON);
    let request = &session.requests_to("/api/car/filters/min-max-cell").await[0];
    assert_eq!(request.url.query(), None);
}

#[tokio::test]
async fn contracts_decode_legacy_and_unknown_states() {
    let session = TestSession::signed_in("tok").await;
    let contract = |id: i64, state: &str| {
        json!({
            "id": id,
            "totalCost": 9000.0,
            "brand": "BMW",
            "model": "X5",
            "bodyType": "SUV",
            "carClass": "Business",
            "yearOfIssue": 2021,
            "lastName": "Ivanov",
            "startDate": "2024-05-01",
            "endDate": "2024-05-03",
            "vin": "WBA123",
            "gosNumber": "A123BC",
            "state": state
        })
    };
    Mock::given(method("GET"))
        .and(path("/api/contracts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paged(
            vec![contract(1, "AWAITING_CANCELLATION"), contract(2, "SOMETHING_NEW")],
            0,
            2,
            1,
        )))
        .mount(&session.server)
        .await;

    let page = HttpContractRepository::new(&session.context)
        .contracts(&PageRequest::default())
        .await
        .unwrap();

    assert_eq!(page.items[0].state, Some(ContractState::CancellationRequested));
    assert_eq!(page.items[1].state, Some(ContractState::Unknown));
}

#[tokio::test]
async fn admin_car_creation_is_multipart() {
    let session = TestSession::signed_in("admin").await;
    Mock::given(method("POST"))
        .and(path("/api/admin/cars"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 99,
            "modelId": 4,
            "brand": "BMW",
            "model": "X5",
            "bodyType": "SUV",
            "carClass": "Business",
            "yearOfIssue": 2020,
            "gosNumber": "A123BC",
            "vin": "WBA123",
            "status": "AVAILABLE",
            "rent": 3500.0
        })))
        .expect(1)
        .mount(&session.server)
        .await;

    let car = CreateCarRequest {
        model_id: 4,
        year_of_issue: 2020,
        gos_number: "A123BC".into(),
        vin: "WBA123".into(),
        rent: 3500.0,
        state_id: 1,
    };
    let created = HttpAdminRepository::new(&session.context)
        .create_car(car, FileUpload::new("car.jpg", "image/jpeg", vec![0xFF, 0xD8, 0xFF]))
        .await
        .unwrap();
    assert_eq!(created.id, 99);

    let request = &session.requests_to("/api/admin/cars").await[0];
    let content_type = request.headers.get("content-type").unwrap().to_str().unwrap();
    assert!(content_type.starts_with("multipart/form-data"));
    let body = String::from_utf8_lossy(&request.body);
    assert!(body.contains("name=\"car\""));
    assert!(body.contains("name=\"image\"; filename=\"car.jpg\""));
    assert!(body.contains("\"vin\":\"WBA123\""));
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let session = TestSession::anonymous().await;
    Mock::given(path("/api/car/filters/brands"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&session.server)
        .await;

    let result = HttpCarRepository::new(&session.context).brands().await;
    assert!(matches!(result, Err(CatalogueError::Decode(_))));
}

#[tokio::test]
async fn not_found_keeps_status() {
    let session = TestSession::signed_in("tok").await;
    Mock::given(path("/api/cars/favorites/5"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not a favorite"))
        .mount(&session.server)
        .await;

    let result = HttpCarRepository::new(&session.context).favorite(5).await;
    assert_eq!(result.unwrap_err().status(), Some(404));
}

#[tokio::test]
async fn me_accepts_empty_body() {
    let session = TestSession::signed_in("tok").await;
    Mock::given(path("/api/profile/me")).respond_with(ResponseTemplate::new(200)).mount(&session.server).await;

    HttpProfileRepository::new(&session.context).me().await.unwrap();
}
