// src/analysis/hypotheses.rs

//! The five business hypotheses. Each evaluator is a pure function of the
//! listing set: bucket, average per bucket, percentage change between
//! buckets, then a verdict computed from the observed change.

use crate::analysis::aggregate::{
    group_mean_by_key, mean, pct_between, pct_change, pct_change_by_value,
};
use crate::dataset::Listing;
use chrono::Datelike;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// How far (in percentage points) the observed change may sit from the
/// claimed one for the hypothesis to hold.
pub const TOLERANCE_PCT: f64 = 5.0;

pub const YEAR_BUILT_CUTOFF: i32 = 1955;
pub const YOY_MONTH: u32 = 5;
pub const MOM_BATHROOMS: f64 = 3.0;
pub const MOM_YEAR: i32 = 2015;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    True,
    False,
    Inconclusive,
}

impl Verdict {
    pub fn judge(observed: Option<f64>, claimed: f64) -> Verdict {
        match observed {
            Some(o) if (o - claimed).abs() <= TOLERANCE_PCT => Verdict::True,
            Some(_) => Verdict::False,
            None => Verdict::Inconclusive,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::True => write!(f, "True"),
            Verdict::False => write!(f, "False"),
            Verdict::Inconclusive => write!(f, "Inconclusive"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub bucket: String,
    pub value: f64,
    pub pct_change: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryTable {
    pub bucket_label: &'static str,
    pub value_label: &'static str,
    pub rows: Vec<SummaryRow>,
}

impl SummaryTable {
    pub fn row(&self, bucket: &str) -> Option<&SummaryRow> {
        self.rows.iter().find(|r| r.bucket == bucket)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub label: String,
    pub value: Option<f64>,
}

/// What to draw; the templates decide how.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub bars: Vec<Bar>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HypothesisReport {
    pub id: &'static str,
    pub statement: &'static str,
    pub claimed_pct: f64,
    pub observed_pct: Option<f64>,
    pub verdict: Verdict,
    pub conclusion: String,
    pub table: SummaryTable,
    pub chart: BarChart,
}

#[derive(Clone, Copy)]
enum PctOrder {
    ByKey,
    ByValue,
}

fn summarize<K: ToString>(
    means: BTreeMap<K, f64>,
    order: PctOrder,
    bucket_label: &'static str,
    value_label: &'static str,
) -> SummaryTable {
    let (keys, values): (Vec<K>, Vec<f64>) = means.into_iter().unzip();
    let pct = match order {
        PctOrder::ByKey => pct_change(&values),
        PctOrder::ByValue => pct_change_by_value(&values),
    };

    let rows = keys
        .iter()
        .zip(values)
        .zip(pct)
        .map(|((k, value), pct_change)| SummaryRow {
            bucket: k.to_string(),
            value,
            pct_change,
        })
        .collect();

    SummaryTable {
        bucket_label,
        value_label,
        rows,
    }
}

fn value_bars(table: &SummaryTable) -> Vec<Bar> {
    table
        .rows
        .iter()
        .map(|r| Bar {
            label: r.bucket.clone(),
            value: Some(r.value),
        })
        .collect()
}

/// Change of bucket `a` relative to bucket `b`.
fn relative_change(table: &SummaryTable, a: &str, b: &str) -> Option<f64> {
    let a = table.row(a)?.value;
    let b = table.row(b)?.value;
    pct_between(b, a)
}

fn mean_change(table: &SummaryTable) -> Option<f64> {
    let changes: Vec<f64> = table.rows.iter().filter_map(|r| r.pct_change).collect();
    mean(&changes)
}

fn direction(pct: f64, up: &'static str, down: &'static str) -> &'static str {
    if pct >= 0.0 {
        up
    } else {
        down
    }
}

fn conclude(verdict: Verdict, observed: Option<f64>, describe: impl Fn(f64) -> String) -> String {
    match observed {
        Some(pct) => format!("{verdict}: {}", describe(pct)),
        None => format!("{verdict}: not enough listings in every bucket to compare"),
    }
}

/// H1: waterfront houses are 20% more expensive on average.
pub fn waterfront_premium(listings: &[Listing]) -> HypothesisReport {
    let claimed = 20.0;
    let means = group_mean_by_key(
        listings,
        |l| if l.waterfront { "yes" } else { "no" },
        |l| l.price,
    );
    let table = summarize(means, PctOrder::ByValue, "waterfront", "price");
    let observed = relative_change(&table, "yes", "no");
    let verdict = Verdict::judge(observed, claimed);

    HypothesisReport {
        id: "H1",
        statement: "Waterfront houses are 20% more expensive on average",
        claimed_pct: claimed,
        observed_pct: observed,
        verdict,
        conclusion: conclude(verdict, observed, |pct| {
            format!(
                "Waterfront houses are {:.2}% {} expensive on average",
                pct.abs(),
                direction(pct, "more", "less")
            )
        }),
        chart: BarChart {
            title: "Average house prices by waterfront",
            x_label: "waterfront",
            y_label: "price",
            bars: value_bars(&table),
        },
        table,
    }
}

/// H2: houses built before 1955 are 20% less expensive on average.
pub fn built_before_1955(listings: &[Listing]) -> HypothesisReport {
    let claimed = -20.0;
    let means = group_mean_by_key(
        listings,
        |l| if l.yr_built < YEAR_BUILT_CUTOFF { "before" } else { "after" },
        |l| l.price,
    );
    let table = summarize(means, PctOrder::ByKey, "1955", "price");
    let observed = relative_change(&table, "before", "after");
    let verdict = Verdict::judge(observed, claimed);

    HypothesisReport {
        id: "H2",
        statement: "Houses built before 1955 are 20% less expensive on average",
        claimed_pct: claimed,
        observed_pct: observed,
        verdict,
        conclusion: conclude(verdict, observed, |pct| {
            format!(
                "Houses built before 1955 are {:.2}% {} expensive on average",
                pct.abs(),
                direction(pct, "more", "less")
            )
        }),
        chart: BarChart {
            title: "Average house prices before and after 1955",
            x_label: "1955",
            y_label: "price",
            bars: value_bars(&table),
        },
        table,
    }
}

/// H3: houses without a basement have 50% bigger lots on average.
pub fn basement_lot_size(listings: &[Listing]) -> HypothesisReport {
    let claimed = 50.0;
    let means = group_mean_by_key(
        listings,
        |l| if l.sqft_basement == 0 { "no" } else { "yes" },
        |l| l.sqft_lot as f64,
    );
    let table = summarize(means, PctOrder::ByValue, "basement", "sqft_lot");
    let observed = relative_change(&table, "no", "yes");
    let verdict = Verdict::judge(observed, claimed);

    HypothesisReport {
        id: "H3",
        statement: "Houses without basement are 50% bigger on average",
        claimed_pct: claimed,
        observed_pct: observed,
        verdict,
        conclusion: conclude(verdict, observed, |pct| {
            format!(
                "Houses without basement are {:.2}% {} on average",
                pct.abs(),
                direction(pct, "bigger", "smaller")
            )
        }),
        chart: BarChart {
            title: "Houses sizes (squarefoot)",
            x_label: "basement",
            y_label: "sqft_lot",
            bars: value_bars(&table),
        },
        table,
    }
}

/// H4: prices grow 10% year over year, comparing May sales only.
pub fn may_prices_yoy(listings: &[Listing]) -> HypothesisReport {
    let claimed = 10.0;
    let may: Vec<&Listing> = listings
        .iter()
        .filter(|l| l.date.month() == YOY_MONTH)
        .collect();
    let means = group_mean_by_key(&may, |l| l.date.year(), |l| l.price);
    let table = summarize(means, PctOrder::ByKey, "year", "price");
    let observed = mean_change(&table);
    let verdict = Verdict::judge(observed, claimed);

    HypothesisReport {
        id: "H4",
        statement: "House prices increase 10% YoY",
        claimed_pct: claimed,
        observed_pct: observed,
        verdict,
        conclusion: conclude(verdict, observed, |pct| {
            format!(
                "House prices {} {:.2}% YoY",
                direction(pct, "increase", "decrease"),
                pct.abs()
            )
        }),
        chart: BarChart {
            title: "Houses prices increasing YoY",
            x_label: "year",
            y_label: "price",
            bars: value_bars(&table),
        },
        table,
    }
}

/// H5: three-bathroom houses grow 15% month over month during 2015.
pub fn three_bath_mom(listings: &[Listing]) -> HypothesisReport {
    let claimed = 15.0;
    let three_baths: Vec<&Listing> = listings
        .iter()
        .filter(|l| l.bathrooms == MOM_BATHROOMS && l.date.year() == MOM_YEAR)
        .collect();
    let means = group_mean_by_key(&three_baths, |l| l.date.month(), |l| l.price);
    let table = summarize(means, PctOrder::ByKey, "month", "price");
    let observed = mean_change(&table);
    let verdict = Verdict::judge(observed, claimed);

    // Charted as the monthly change rather than the price level.
    let bars = table
        .rows
        .iter()
        .map(|r| Bar {
            label: r.bucket.clone(),
            value: r.pct_change,
        })
        .collect();

    let peak = table
        .rows
        .iter()
        .filter_map(|r| r.pct_change.map(|p| (r.bucket.clone(), p)))
        .max_by(|a, b| a.1.total_cmp(&b.1));

    HypothesisReport {
        id: "H5",
        statement: "Three bathroom house prices increase 15% MoM",
        claimed_pct: claimed,
        observed_pct: observed,
        verdict,
        conclusion: conclude(verdict, observed, |pct| {
            let mut text = format!(
                "Three bathroom house prices {} {:.2}% MoM on average",
                direction(pct, "increase", "decrease"),
                pct.abs()
            );
            if let Some((month, best)) = &peak {
                text.push_str(&format!(", with the largest change ({best:+.2}%) in month {month}"));
            }
            text
        }),
        chart: BarChart {
            title: "Houses prices variations MoM",
            x_label: "month",
            y_label: "var_pct",
            bars,
        },
        table,
    }
}

/// All five, in presentation order.
pub fn evaluate_all(listings: &[Listing]) -> Vec<HypothesisReport> {
    vec![
        waterfront_premium(listings),
        built_before_1955(listings),
        basement_lot_size(listings),
        may_prices_yoy(listings),
        three_bath_mom(listings),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::utils::{fixture_dataset, listing};

    fn approx(a: Option<f64>, b: f64) -> bool {
        a.map(|a| (a - b).abs() < 1e-6).unwrap_or(false)
    }

    #[test]
    fn verdict_uses_tolerance() {
        assert_eq!(Verdict::judge(Some(22.0), 20.0), Verdict::True);
        assert_eq!(Verdict::judge(Some(-24.9), -20.0), Verdict::True);
        assert_eq!(Verdict::judge(Some(212.0), 20.0), Verdict::False);
        assert_eq!(Verdict::judge(None, 20.0), Verdict::Inconclusive);
    }

    #[test]
    fn waterfront_over_fixture() {
        let ds = fixture_dataset();
        let h1 = waterfront_premium(ds.listings());

        let no = h1.table.row("no").unwrap();
        let yes = h1.table.row("yes").unwrap();
        assert_eq!(no.value, 504400.0);
        assert_eq!(yes.value, 400925.0);

        // waterfront is the cheaper bucket, so the change sits on "no"
        assert_eq!(yes.pct_change, None);
        assert!(approx(no.pct_change, (504400.0 / 400925.0 - 1.0) * 100.0));

        assert!(approx(h1.observed_pct, (400925.0 / 504400.0 - 1.0) * 100.0));
        assert_eq!(h1.verdict, Verdict::False);
        assert!(h1.conclusion.starts_with("False: Waterfront houses are 20.51% less"));
    }

    #[test]
    fn before_1955_over_fixture() {
        let ds = fixture_dataset();
        let h2 = built_before_1955(ds.listings());

        let buckets: Vec<&str> = h2.table.rows.iter().map(|r| r.bucket.as_str()).collect();
        assert_eq!(buckets, vec!["after", "before"]);
        assert_eq!(h2.table.rows[0].pct_change, None);
        assert_eq!(h2.table.row("before").unwrap().value, 359000.0);
        assert_eq!(h2.table.row("after").unwrap().value, 518375.0);
        assert!(approx(h2.observed_pct, (359000.0 / 518375.0 - 1.0) * 100.0));
        assert_eq!(h2.verdict, Verdict::False);
    }

    #[test]
    fn basement_over_fixture() {
        let ds = fixture_dataset();
        let h3 = basement_lot_size(ds.listings());

        assert_eq!(h3.table.row("no").unwrap().value, 8052.0);
        assert!(approx(Some(h3.table.row("yes").unwrap().value), 114172.0 / 3.0));
        assert!(approx(h3.observed_pct, (8052.0 / (114172.0 / 3.0) - 1.0) * 100.0));
        assert_eq!(h3.verdict, Verdict::False);
    }

    #[test]
    fn yoy_over_fixture() {
        let ds = fixture_dataset();
        let h4 = may_prices_yoy(ds.listings());

        let buckets: Vec<&str> = h4.table.rows.iter().map(|r| r.bucket.as_str()).collect();
        assert_eq!(buckets, vec!["2014", "2015"]);
        assert!(approx(h4.observed_pct, (510000.0 / 1225000.0 - 1.0) * 100.0));
        assert_eq!(h4.chart.bars.len(), 2);
    }

    #[test]
    fn mom_over_fixture() {
        let ds = fixture_dataset();
        let h5 = three_bath_mom(ds.listings());

        // the 2014 three-bath sale is excluded
        let buckets: Vec<&str> = h5.table.rows.iter().map(|r| r.bucket.as_str()).collect();
        assert_eq!(buckets, vec!["3", "5"]);
        assert_eq!(h5.chart.bars[0].value, None);
        assert!(approx(h5.chart.bars[1].value, (510000.0 / 604000.0 - 1.0) * 100.0));
        assert!(h5.conclusion.contains("month 5"));
    }

    #[test]
    fn true_when_the_claim_matches() {
        let listings = vec![
            listing(1, (2014, 5, 1), 100.0),
            listing(2, (2015, 5, 1), 110.0),
        ];
        let h4 = may_prices_yoy(&listings);
        assert!(approx(h4.observed_pct, 10.0));
        assert_eq!(h4.verdict, Verdict::True);
        assert!(h4.conclusion.starts_with("True: House prices increase 10.00% YoY"));
    }

    #[test]
    fn empty_bucket_is_missing_not_a_panic() {
        // nothing built before 1955 and no waterfront
        let listings = vec![listing(1, (2014, 6, 1), 100.0), listing(2, (2014, 7, 1), 200.0)];

        let h1 = waterfront_premium(&listings);
        assert_eq!(h1.table.rows.len(), 1);
        assert_eq!(h1.table.rows[0].pct_change, None);
        assert_eq!(h1.observed_pct, None);
        assert_eq!(h1.verdict, Verdict::Inconclusive);

        let h2 = built_before_1955(&listings);
        assert_eq!(h2.verdict, Verdict::Inconclusive);

        // no May sales at all
        let h4 = may_prices_yoy(&listings);
        assert!(h4.table.rows.is_empty());
        assert!(h4.conclusion.starts_with("Inconclusive"));
    }

    #[test]
    fn evaluate_all_is_in_order() {
        let ds = fixture_dataset();
        let ids: Vec<&str> = evaluate_all(ds.listings()).iter().map(|h| h.id).collect();
        assert_eq!(ids, vec!["H1", "H2", "H3", "H4", "H5"]);
    }
}
