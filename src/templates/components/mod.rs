use maud::{html, Markup};

pub mod charts;
pub mod error;

pub use charts::{bar_chart, price_map};
pub use error::error_page;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        section class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// Missing values render as a dash.
pub fn fmt_opt(value: Option<f64>) -> String {
    value.map(fmt_num).unwrap_or_else(|| "–".to_string())
}

pub fn fmt_num(value: f64) -> String {
    format!("{value:.2}")
}

pub fn fmt_pct(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:+.2}%"),
        None => "–".to_string(),
    }
}

/// "Showing N of M rows" when a table is capped.
pub fn row_cap_note(shown: usize, total: usize) -> Markup {
    html! {
        @if shown < total {
            p class="muted" { "Showing " (shown) " of " (total) " rows." }
        }
    }
}
