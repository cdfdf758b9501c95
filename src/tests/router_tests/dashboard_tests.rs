use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::test_state;
use astra::{Body, Response};
use http::{Method, Request};
use std::io::Read;

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn error_for(uri: &str) -> ServerError {
    match handle(get(uri), &test_state()) {
        Ok(resp) => panic!("{uri} answered {}", resp.status()),
        Err(err) => err,
    }
}

fn body_of(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

#[test]
fn dashboard_renders_every_section() {
    let state = test_state();

    let resp = handle(get("/"), &state).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_of(resp);
    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains("House Rocket Map"));
    assert!(body.contains("id=\"data-table\""));
    assert!(body.contains("id=\"describe-table\""));
    assert!(body.contains("id=\"buy-table\""));
    assert!(body.contains("id=\"sell-table\""));
    assert!(body.contains("Waterfront houses are 20% more expensive on average"));
}

#[test]
fn section_pages_load() {
    let state = test_state();

    for uri in ["/map", "/data", "/reports", "/hypotheses"] {
        let resp = handle(get(uri), &state).expect("Failed to handle request");
        assert_eq!(resp.status(), 200, "{uri}");
        assert!(body_of(resp).contains("<html"), "{uri}");
    }
}

#[test]
fn map_defaults_to_the_mean_price() {
    let state = test_state();

    let body = body_of(handle(get("/map"), &state).unwrap());

    assert!(body.contains("value=\"478531\""));
    assert!(body.contains("4 houses below the selected price."));
    assert_eq!(body.matches("<circle").count(), 4);
}

#[test]
fn map_filters_by_requested_price() {
    let state = test_state();

    let body = body_of(handle(get("/map?price=250000"), &state).unwrap());

    assert!(body.contains("2 houses below the selected price."));
    assert_eq!(body.matches("<circle").count(), 2);
}

#[test]
fn map_clamps_out_of_range_prices() {
    let state = test_state();

    let body = body_of(handle(get("/map?price=1"), &state).unwrap());

    assert!(body.contains("value=\"180000\""));
    assert!(body.contains("0 houses below the selected price."));
    assert!(body.contains("No houses below this price."));
}

#[test]
fn bad_price_is_rejected() {
    let err = error_for("/map?price=cheap");
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn data_table_shows_only_selected_columns() {
    let state = test_state();

    let body = body_of(handle(get("/data?columns=price&columns=zipcode"), &state).unwrap());
    let table = body
        .split("id=\"describe-table\"")
        .next()
        .unwrap()
        .split("id=\"data-table\"")
        .nth(1)
        .unwrap();

    assert!(table.contains("<th>price</th>"));
    assert!(table.contains("<th>zipcode</th>"));
    assert!(!table.contains("<th>bedrooms</th>"));
    assert!(table.contains("98178"));
}

#[test]
fn unknown_column_is_rejected() {
    let err = error_for("/data?columns=pool");
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn unknown_route_is_not_found() {
    let err = error_for("/nope");
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn post_is_not_routed() {
    let state = test_state();

    let req = Request::builder()
        .method(Method::POST)
        .uri("/")
        .body(Body::empty())
        .unwrap();

    assert!(handle(req, &state).is_err());
}

#[test]
fn responses_carry_the_dataset_etag() {
    let state = test_state();
    let expected = format!("\"{}\"", state.dataset.fingerprint());

    let resp = handle(get("/hypotheses"), &state).unwrap();
    let etag = resp.headers().get("ETag").unwrap().to_str().unwrap();
    assert_eq!(etag, expected);
}

#[test]
fn matching_etag_is_not_modified() {
    let state = test_state();
    let etag = format!("\"{}\"", state.dataset.fingerprint());

    let req = Request::builder()
        .method(Method::GET)
        .uri("/reports")
        .header("If-None-Match", etag)
        .body(Body::empty())
        .unwrap();

    let resp = handle(req, &state).unwrap();
    assert_eq!(resp.status(), 304);
    assert!(body_of(resp).is_empty());
}

#[test]
fn etag_does_not_hide_missing_routes() {
    let state = test_state();
    let etag = format!("\"{}\"", state.dataset.fingerprint());

    let req = Request::builder()
        .method(Method::GET)
        .uri("/nope")
        .header("If-None-Match", etag)
        .body(Body::empty())
        .unwrap();

    assert!(handle(req, &state).is_err());
}
