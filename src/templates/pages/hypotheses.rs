use crate::analysis::{HypothesisReport, Verdict};
use crate::templates::card;
use crate::templates::components::{bar_chart, fmt_num, fmt_pct};
use maud::{html, Markup};

fn verdict_class(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::True => "verdict-true",
        Verdict::False => "verdict-false",
        Verdict::Inconclusive => "verdict-inconclusive",
    }
}

fn hypothesis_card(h: &HypothesisReport) -> Markup {
    card(
        &format!("{}: {}", h.id, h.statement),
        html! {
            table class="summary" {
                thead {
                    tr {
                        th { (h.table.bucket_label) }
                        th { (h.table.value_label) }
                        th { "var_pct" }
                    }
                }
                tbody {
                    @for row in &h.table.rows {
                        tr {
                            td { (row.bucket) }
                            td class="num" { (fmt_num(row.value)) }
                            td class="num" { (fmt_pct(row.pct_change)) }
                        }
                    }
                }
            }
            (bar_chart(&h.chart))
            h4 class=(verdict_class(h.verdict)) { (h.conclusion) }
        },
    )
}

pub fn hypotheses_section(reports: &[HypothesisReport]) -> Markup {
    html! {
        h1 { "Data exploration - Hypothesis" }
        @for h in reports {
            (hypothesis_card(h))
        }
    }
}
