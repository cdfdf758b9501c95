use crate::analysis::{
    buy_report, describe, evaluate_all, listings_below, sell_report, PriceRange,
};
use crate::dataset::Column;
use crate::errors::ServerError;
use crate::responses::{html_response, json_response, ResultResp};
use crate::spreadsheets::{export_buy_report_xlsx, export_sell_report_xlsx};
use crate::state::AppState;
use crate::templates::pages::{
    dashboard_page, data_section, hypotheses_section, map_section, reports_section, section_page,
    DashboardVm, DataVm, Filters, MapVm, ReportsVm,
};
use astra::{Body, Request, ResponseBuilder};

const ROUTES: &[&str] = &[
    "/",
    "/map",
    "/data",
    "/reports",
    "/hypotheses",
    "/export/buy.xlsx",
    "/export/sell.xlsx",
    "/api/hypotheses",
];

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    log::debug!("{method} {path}");

    let etag = format!("\"{}\"", state.dataset.fingerprint());
    if method == "GET" && ROUTES.contains(&path) && matches_etag(&req, &etag) {
        return not_modified(&etag);
    }

    let query = Query::from_request(&req);
    let listings = state.dataset.listings();

    let mut resp = match (method, path) {
        ("GET", "/") => {
            let (range, filters) = filters(state, &query)?;
            let buy = buy_report(listings);
            let sell = sell_report(listings);

            let vm = DashboardVm {
                source: state.dataset.source(),
                listing_count: listings.len(),
                map: MapVm {
                    range,
                    points: listings_below(listings, filters.threshold),
                },
                data: data_vm(state),
                reports: ReportsVm {
                    buy: &buy,
                    sell: &sell,
                    row_cap: state.config.table_rows,
                },
                hypotheses: evaluate_all(listings),
                filters,
            };
            html_response(dashboard_page(&vm))
        }

        ("GET", "/map") => {
            let (range, filters) = filters(state, &query)?;
            let vm = MapVm {
                range,
                points: listings_below(listings, filters.threshold),
            };
            html_response(section_page("Map", map_section(&vm, &filters, "/map")))
        }

        ("GET", "/data") => {
            let (_, filters) = filters(state, &query)?;
            let vm = data_vm(state);
            html_response(section_page("Data", data_section(&vm, &filters, "/data")))
        }

        ("GET", "/reports") => {
            let buy = buy_report(listings);
            let sell = sell_report(listings);
            let vm = ReportsVm {
                buy: &buy,
                sell: &sell,
                row_cap: state.config.table_rows,
            };
            html_response(section_page("Reports", reports_section(&vm)))
        }

        ("GET", "/hypotheses") => html_response(section_page(
            "Hypotheses",
            hypotheses_section(&evaluate_all(listings)),
        )),

        ("GET", "/export/buy.xlsx") => export_buy_report_xlsx(&buy_report(listings)),
        ("GET", "/export/sell.xlsx") => export_sell_report_xlsx(&sell_report(listings)),

        ("GET", "/api/hypotheses") => json_response(&evaluate_all(listings)),

        _ => Err(ServerError::NotFound),
    }?;

    let value = etag.parse().map_err(|_| ServerError::InternalError)?;
    resp.headers_mut().insert("ETag", value);
    Ok(resp)
}

fn data_vm(state: &AppState) -> DataVm<'_> {
    let listings = state.dataset.listings();
    let shown = listings.len().min(state.config.table_rows);
    DataVm {
        rows: &listings[..shown],
        total: listings.len(),
        summary: describe(listings),
    }
}

/// Slider bounds plus the widget state requested in the query string.
fn filters(state: &AppState, query: &Query) -> Result<(PriceRange, Filters), ServerError> {
    let range = PriceRange::of(state.dataset.listings())
        .ok_or_else(|| ServerError::DataError("dataset has no prices".into()))?;

    let requested = match query.first("price") {
        Some(raw) => Some(parse_price(raw)?),
        None => None,
    };

    let columns = Column::parse_list(&query.all("columns")).map_err(ServerError::BadRequest)?;

    Ok((
        range,
        Filters {
            threshold: range.threshold(requested),
            columns,
        },
    ))
}

fn parse_price(raw: &str) -> Result<i64, ServerError> {
    let raw = raw.trim();
    raw.parse::<i64>()
        .or_else(|_| {
            raw.parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .map(|v| v as i64)
                .ok_or(())
        })
        .map_err(|_| ServerError::BadRequest(format!("price must be a number, got '{raw}'")))
}

fn matches_etag(req: &Request, etag: &str) -> bool {
    req.headers()
        .get("If-None-Match")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.split(',').any(|tag| tag.trim() == etag))
        .unwrap_or(false)
}

fn not_modified(etag: &str) -> ResultResp {
    ResponseBuilder::new()
        .status(304)
        .header("ETag", etag)
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)
}

/// Decoded query-string pairs, repeated keys kept in order.
struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    fn from_request(req: &Request) -> Self {
        let pairs = req
            .uri()
            .query()
            .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
            .unwrap_or_default();
        Self { pairs }
    }

    fn first(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    fn all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, v)| k == key && !v.is_empty())
            .map(|(_, v)| v.as_str())
            .collect()
    }
}
