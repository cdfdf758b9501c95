use crate::responses::XLSX_CONTENT_TYPE;
use crate::router::handle;
use crate::tests::utils::test_state;
use astra::Body;
use http::{Method, Request};
use serde_json::Value;
use std::io::Read;

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[test]
fn buy_report_downloads_as_xlsx() {
    let state = test_state();

    let resp = handle(get("/export/buy.xlsx"), &state).expect("Failed to handle request");

    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers().get("Content-Type").unwrap(), XLSX_CONTENT_TYPE);
    assert_eq!(
        resp.headers().get("Content-Disposition").unwrap(),
        "attachment; filename=\"houses_to_buy.xlsx\""
    );

    let mut bytes = Vec::new();
    resp.into_body().reader().read_to_end(&mut bytes).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn sell_report_downloads_as_xlsx() {
    let state = test_state();

    let resp = handle(get("/export/sell.xlsx"), &state).unwrap();

    assert_eq!(
        resp.headers().get("Content-Disposition").unwrap(),
        "attachment; filename=\"houses_to_sell.xlsx\""
    );
}

#[test]
fn hypotheses_api_returns_five_reports() {
    let state = test_state();

    let resp = handle(get("/api/hypotheses"), &state).unwrap();
    assert_eq!(resp.headers().get("Content-Type").unwrap(), "application/json");

    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    let json: Value = serde_json::from_str(&body).unwrap();

    let reports = json.as_array().unwrap();
    assert_eq!(reports.len(), 5);
    assert_eq!(reports[0]["id"], "H1");
    assert_eq!(reports[0]["verdict"], "False");
    assert!(reports[0]["table"]["rows"].is_array());
}
