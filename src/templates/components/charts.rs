// templates/components/charts.rs

//! Server-rendered SVG: bar charts for the hypotheses and the price map.

use crate::analysis::hypotheses::BarChart;
use crate::analysis::map::price_weight;
use crate::analysis::{PriceRange, Projection};
use crate::dataset::Listing;
use maud::{html, Markup};

const CHART_W: f64 = 640.0;
const CHART_H: f64 = 320.0;
const MARGIN: f64 = 40.0;

const MAP_W: f64 = 800.0;
const MAP_H: f64 = 600.0;

/// Compact bar label, e.g. 540k or 1.2M.
pub fn short_number(v: f64) -> String {
    let abs = v.abs();
    if abs >= 1_000_000.0 {
        format!("{:.2}M", v / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{:.0}k", v / 1_000.0)
    } else {
        format!("{v:.2}")
    }
}

pub fn bar_chart(chart: &BarChart) -> Markup {
    let values: Vec<f64> = chart.bars.iter().filter_map(|b| b.value).collect();
    let hi = values.iter().copied().fold(0.0_f64, f64::max);
    let lo = values.iter().copied().fold(0.0_f64, f64::min);
    let span = if hi - lo > 0.0 { hi - lo } else { 1.0 };

    let plot_h = CHART_H - 2.0 * MARGIN;
    let plot_w = CHART_W - 2.0 * MARGIN;
    let y_of = |v: f64| MARGIN + (hi - v) / span * plot_h;
    let zero_y = y_of(0.0);

    let slot = plot_w / chart.bars.len().max(1) as f64;
    let bar_w = slot * 0.6;

    html! {
        figure class="chart" {
            figcaption { (chart.title) }
            svg
                xmlns="http://www.w3.org/2000/svg"
                viewBox=(format!("0 0 {CHART_W} {CHART_H}"))
                role="img"
                aria-label=(chart.title)
            {
                line x1=(MARGIN) y1=(format!("{zero_y:.1}")) x2=(CHART_W - MARGIN) y2=(format!("{zero_y:.1}")) stroke="#9ca3af" {}

                @for (i, bar) in chart.bars.iter().enumerate() {
                    @let x = MARGIN + slot * i as f64 + (slot - bar_w) / 2.0;
                    @let cx = x + bar_w / 2.0;
                    @if let Some(v) = bar.value {
                        @let top = y_of(v).min(zero_y);
                        @let height = (y_of(v) - zero_y).abs();
                        rect
                            class="bar"
                            x=(format!("{x:.1}"))
                            y=(format!("{top:.1}"))
                            width=(format!("{bar_w:.1}"))
                            height=(format!("{height:.1}"))
                            fill=(if v >= 0.0 { "#636efa" } else { "#ef553b" })
                        {
                            title { (bar.label) ": " (short_number(v)) }
                        }
                        text x=(format!("{cx:.1}")) y=(format!("{:.1}", top - 6.0)) text-anchor="middle" font-size="12" {
                            (short_number(v))
                        }
                    } @else {
                        text x=(format!("{cx:.1}")) y=(format!("{:.1}", zero_y - 6.0)) text-anchor="middle" font-size="12" fill="#6b7280" { "–" }
                    }
                    text x=(format!("{cx:.1}")) y=(format!("{:.1}", CHART_H - MARGIN / 2.0)) text-anchor="middle" font-size="12" {
                        (bar.label)
                    }
                }

                text x=(CHART_W / 2.0) y=(CHART_H - 4.0) text-anchor="middle" font-size="11" fill="#6b7280" { (chart.x_label) }
                text x="12" y=(CHART_H / 2.0) text-anchor="middle" font-size="11" fill="#6b7280"
                    transform=(format!("rotate(-90 12 {})", CHART_H / 2.0)) { (chart.y_label) }
            }
        }
    }
}

/// Listings plotted by lat/long, sized and coloured by price (blue cheap, red expensive).
pub fn price_map(points: &[&Listing], range: &PriceRange) -> Markup {
    let projection = Projection::fit(points.iter().copied(), MAP_W, MAP_H);

    html! {
        figure class="map" {
            svg
                xmlns="http://www.w3.org/2000/svg"
                viewBox=(format!("0 0 {MAP_W} {MAP_H}"))
                role="img"
                aria-label="House prices by location"
            {
                rect width=(MAP_W) height=(MAP_H) fill="#f8fafc" {}
                @if let Some(proj) = projection {
                    @for l in points {
                        @let pos = proj.project(l.lat, l.long);
                        @let w = price_weight(l.price, range);
                        circle
                            cx=(format!("{:.1}", pos.0))
                            cy=(format!("{:.1}", pos.1))
                            r=(format!("{:.1}", 2.0 + 6.0 * w))
                            fill=(format!("hsl({:.0}, 80%, 50%)", 220.0 * (1.0 - w)))
                            fill-opacity="0.7"
                        {
                            title { "id " (l.id) ": $" (format!("{:.0}", l.price)) }
                        }
                    }
                } @else {
                    text x=(MAP_W / 2.0) y=(MAP_H / 2.0) text-anchor="middle" fill="#6b7280" {
                        "No houses below this price."
                    }
                }
            }
        }
    }
}
