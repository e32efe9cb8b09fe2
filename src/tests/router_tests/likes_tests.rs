use crate::errors::ServerError;
use crate::likes::LikedListings;
use crate::router::{handle, AppState};
use crate::storage::SqliteStore;
use crate::tests::utils::{body_string, init_test_state};
use astra::Body;
use http::{Method, Request};

fn post(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn likes(state: &AppState) -> LikedListings<SqliteStore> {
    LikedListings::new(SqliteStore::new(state.db.clone()))
}

#[test]
fn like_then_unlike_keeps_snapshot() {
    let state = init_test_state();

    // 1. Like listing 3
    let resp = handle(post("/likes/3"), &state).expect("Handler failed");
    assert_eq!(resp.status(), 302, "Should redirect after like");
    assert_eq!(resp.headers().get("Location").unwrap().to_str().unwrap(), "/");
    assert_eq!(likes(&state).liked_ids().unwrap(), vec![3]);

    // 2. Same post again unlikes
    let resp = handle(post("/likes/3"), &state).expect("Handler failed");
    assert_eq!(resp.status(), 302);

    // 3. Id is gone, snapshot stays behind
    assert!(likes(&state).liked_ids().unwrap().is_empty());
    let snapshots = likes(&state).liked_snapshots().unwrap();
    assert_eq!(snapshots.len(), 1);
    assert_eq!(snapshots[0].id, 3);
}

#[test]
fn like_redirects_back_to_referer() {
    let state = init_test_state();

    let req = Request::builder()
        .method(Method::POST)
        .uri("/likes/1")
        .header("Referer", "http://localhost:3000/listings/results?location=Nairobi&price=3000%2B")
        .body(Body::empty())
        .unwrap();

    let resp = handle(req, &state).expect("Handler failed");
    assert_eq!(
        resp.headers().get("Location").unwrap().to_str().unwrap(),
        "/listings/results?location=Nairobi&price=3000%2B"
    );
}

#[test]
fn liked_listing_shows_on_dashboard_and_home() {
    let state = init_test_state();
    handle(post("/likes/7"), &state).expect("Handler failed");

    let req = Request::builder()
        .method(Method::GET)
        .uri("/liked")
        .body(Body::empty())
        .unwrap();
    let body = body_string(handle(req, &state).expect("Handler failed"));
    assert!(body.contains("Liked listings: <strong>1</strong>"));
    assert!(body.contains("Apartment"));
    assert!(body.contains(r#"action="/likes/7""#));

    let req = Request::builder()
        .method(Method::GET)
        .uri("/listings/results")
        .body(Body::empty())
        .unwrap();
    let body = body_string(handle(req, &state).expect("Handler failed"));
    assert_eq!(body.matches("♥ Liked").count(), 1);
}

#[test]
fn unliked_listing_leaves_dashboard_but_is_still_counted() {
    let state = init_test_state();
    handle(post("/likes/2"), &state).expect("Handler failed");
    handle(post("/likes/2"), &state).expect("Handler failed");

    let req = Request::builder()
        .method(Method::GET)
        .uri("/liked")
        .body(Body::empty())
        .unwrap();
    let body = body_string(handle(req, &state).expect("Handler failed"));
    assert!(body.contains("Liked listings: <strong>0</strong>"));
    assert!(body.contains("Likes recorded: <strong>1</strong>"));
    assert!(body.contains("liked any listings yet."));
}

#[test]
fn detail_page_shows_liked_state() {
    let state = init_test_state();
    handle(post("/likes/4"), &state).expect("Handler failed");

    let req = Request::builder()
        .method(Method::GET)
        .uri("/listings/4")
        .body(Body::empty())
        .unwrap();
    let body = body_string(handle(req, &state).expect("Handler failed"));
    assert!(body.contains("♥ Liked"));
}

#[test]
fn liking_unknown_listing_is_not_found() {
    let state = init_test_state();

    assert!(matches!(handle(post("/likes/99"), &state), Err(ServerError::NotFound)));
    assert!(matches!(handle(post("/likes/abc"), &state), Err(ServerError::BadRequest(_))));
    assert!(likes(&state).liked_snapshots().unwrap().is_empty());
}
