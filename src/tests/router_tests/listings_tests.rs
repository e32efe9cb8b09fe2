// src/tests/router_tests/listings_tests.rs

use crate::errors::ServerError;
use crate::responses::error_to_response;
use crate::router::handle;
use crate::tests::utils::{body_string, init_test_state};
use astra::Body;
use http::{Method, Request};

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn htmx_get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header("HX-Request", "true")
        .body(Body::empty())
        .unwrap()
}

#[test]
fn home_shows_every_listing_without_filters() {
    let state = init_test_state();

    let resp = handle(get("/"), &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Find your next home"));
    assert!(body.contains("Showing <strong>12</strong> listings"));
    assert!(body.contains("Kitengela, Kajiado"));
}

#[test]
fn location_query_filters_listings() {
    let state = init_test_state();

    let resp = handle(get("/listings?location=nairobi&type=&price="), &state).expect("Handler failed");
    let body = body_string(resp);

    assert!(body.contains("Showing <strong>4</strong> listings"));
    assert!(!body.contains("Mlolongo, Machakos"));
    // the search box keeps what the user typed
    assert!(body.contains(r#"value="nairobi""#));
}

#[test]
fn encoded_query_values_are_decoded() {
    let state = init_test_state();

    let resp = handle(get("/listings?location=Kibera%2C+Nairobi"), &state).expect("Handler failed");
    assert!(body_string(resp).contains("Showing <strong>4</strong> listings"));
}

#[test]
fn results_fragment_has_no_layout() {
    let state = init_test_state();

    let resp = handle(htmx_get("/listings/results?type=Apartment"), &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Showing <strong>3</strong> listings"));
    assert!(!body.contains("<html"));
}

#[test]
fn reloading_a_pushed_results_url_gets_the_full_page() {
    let state = init_test_state();

    let resp = handle(get("/listings/results?type=Apartment"), &state).expect("Handler failed");
    let body = body_string(resp);
    assert!(body.contains("<html"));
    assert!(body.contains("Find your next home"));
    assert!(body.contains("Showing <strong>3</strong> listings"));
    assert!(body.contains("Clear filters"));
}

#[test]
fn filter_form_pushes_its_url() {
    let state = init_test_state();

    let body = body_string(handle(get("/"), &state).expect("Handler failed"));
    assert!(body.contains(r#"hx-push-url="true""#));
    assert!(!body.contains("Clear filters"));
    assert!(body.contains(r#"<option value="3000+">3000+</option>"#));
}

#[test]
fn price_bucket_with_no_matches_shows_empty_state() {
    let state = init_test_state();

    let resp = handle(htmx_get("/listings/results?price=1000-2000"), &state).expect("Handler failed");
    let body = body_string(resp);
    assert!(body.contains("Showing <strong>0</strong> listings"));
    assert!(body.contains("No listings match your search."));
}

#[test]
fn open_ended_bucket_keeps_everything() {
    let state = init_test_state();

    let resp = handle(htmx_get("/listings/results?price=3000%2B"), &state).expect("Handler failed");
    assert!(body_string(resp).contains("Showing <strong>12</strong> listings"));
}

#[test]
fn malformed_price_token_is_bad_request() {
    let state = init_test_state();

    match handle(get("/listings?price=cheap"), &state) {
        Err(err @ ServerError::BadRequest(_)) => {
            assert!(err.to_string().contains("cheap"));
            assert_eq!(error_to_response(err).status(), 400);
        }
        Err(other) => panic!("expected BadRequest, got {other:?}"),
        Ok(resp) => panic!("expected BadRequest, got status {}", resp.status()),
    }
}

#[test]
fn unknown_property_type_is_bad_request() {
    let state = init_test_state();

    let result = handle(get("/listings?type=apartment"), &state);
    assert!(matches!(result, Err(ServerError::BadRequest(_))));
}

#[test]
fn listing_detail_page_shows_listing() {
    let state = init_test_state();

    let resp = handle(get("/listings/3"), &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("<h1>Apartment</h1>"));
    assert!(body.contains("Ksh6000"));
    assert!(body.contains("Mlolongo, Machakos"));
    assert!(body.contains("Back to Listings"));
    assert!(body.contains(r#"action="/likes/3""#));
}

#[test]
fn cards_link_to_detail_page() {
    let state = init_test_state();

    let body = body_string(handle(get("/"), &state).expect("Handler failed"));
    assert!(body.contains(r#"href="/listings/12""#));
}

#[test]
fn missing_listing_detail_is_not_found() {
    let state = init_test_state();

    assert!(matches!(handle(get("/listings/13"), &state), Err(ServerError::NotFound)));
    assert!(matches!(handle(get("/listings/0"), &state), Err(ServerError::NotFound)));
}

#[test]
fn non_numeric_listing_id_is_bad_request() {
    let state = init_test_state();

    assert!(matches!(handle(get("/listings/abc"), &state), Err(ServerError::BadRequest(_))));
    assert!(matches!(handle(get("/listings/+3"), &state), Err(ServerError::BadRequest(_))));
}

#[test]
fn unknown_route_is_not_found() {
    let state = init_test_state();

    let result = handle(get("/admin"), &state);
    assert!(matches!(result, Err(ServerError::NotFound)));
    assert_eq!(error_to_response(ServerError::NotFound).status(), 404);
}
