//! Catalog, navigation and status endpoints

mod common;

use axum::http::StatusCode;

use common::{FakeProvider, Script, app_with, get};

#[tokio::test]
async fn health_reports_ok() {
    let app = app_with(None);
    let (status, body) = get(&app, "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn status_reflects_ai_availability() {
    let (_, disabled) = get(&app_with(None), "/api/status").await;
    assert_eq!(disabled["aiEnabled"], false);

    let provider = FakeProvider::new(Script::Fail);
    let (_, enabled) = get(&app_with(Some(provider)), "/api/status").await;
    assert_eq!(enabled["aiEnabled"], true);
    assert_eq!(enabled["version"], travelgems::VERSION);
}

#[tokio::test]
async fn views_list_all_ten_panels() {
    let (status, body) = get(&app_with(None), "/api/views").await;
    assert_eq!(status, StatusCode::OK);

    let views = body.as_array().unwrap();
    assert_eq!(views.len(), 10);
    assert_eq!(views[0]["view"], "home");

    let planner = views.iter().find(|v| v["view"] == "planner").unwrap();
    assert_eq!(planner["available"], false);
}

#[tokio::test]
async fn places_filter_by_category() {
    let (status, body) = get(&app_with(None), "/api/places?category=Lake").await;
    assert_eq!(status, StatusCode::OK);

    let places = body.as_array().unwrap();
    assert!(!places.is_empty());
    assert!(places.iter().all(|p| p["category"] == "Lake"));
}

#[tokio::test]
async fn places_near_include_distance_and_sort() {
    let (status, body) = get(&app_with(None), "/api/places?near=12.4244,76.6565").await;
    assert_eq!(status, StatusCode::OK);

    let places = body.as_array().unwrap();
    assert_eq!(places[0]["id"], "ranganathittu");
    assert_eq!(places[0]["distanceKm"], 0.0);
}

#[tokio::test]
async fn bad_near_is_rejected() {
    let (status, body) = get(&app_with(None), "/api/places?near=north").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("lat,lng"));
}

#[tokio::test]
async fn unknown_filter_value_is_a_json_validation_error() {
    let (status, body) = get(&app_with(None), "/api/places?category=Beach").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn unknown_place_is_not_found() {
    let (status, _) = get(&app_with(None), "/api/places/atlantis").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = get(&app_with(None), "/api/places/talakadu").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["crowdLevel"], "Moderate");
}

#[tokio::test]
async fn artisans_carry_contact_links() {
    let (status, body) = get(&app_with(None), "/api/artisans").await;
    assert_eq!(status, StatusCode::OK);

    for artisan in body.as_array().unwrap() {
        assert!(artisan["links"]["call"].as_str().unwrap().starts_with("tel:+91"));
        assert!(artisan["links"]["whatsapp"].as_str().unwrap().starts_with("https://wa.me/91"));
        assert!(artisan["links"]["map"].as_str().unwrap().starts_with("https://"));
    }
}

#[tokio::test]
async fn restaurants_filter_by_diet() {
    let (status, body) = get(&app_with(None), "/api/restaurants?diet=NonVeg").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().iter().all(|r| r["diet"] != "Veg"));
}

#[tokio::test]
async fn bookings_and_packages_are_listed() {
    let (status, body) = get(&app_with(None), "/api/bookings?kind=Hotel").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().iter().all(|b| b["kind"] == "Hotel"));

    let (status, body) = get(&app_with(None), "/api/packages").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);
}
