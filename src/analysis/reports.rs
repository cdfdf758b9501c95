// src/analysis/reports.rs

use crate::analysis::aggregate::{group_median_by_key, join_aggregate_back};
use crate::analysis::season::{classify_season, Season};
use crate::dataset::Listing;
use serde::Serialize;

/// Lowest condition rating still worth buying.
pub const MIN_BUY_CONDITION: u8 = 3;

pub const DISCOUNT_MARKUP: f64 = 0.3;
pub const STANDARD_MARKUP: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BuyDecision {
    #[serde(rename = "yes")]
    Buy,
    #[serde(rename = "no")]
    NoBuy,
}

impl BuyDecision {
    pub fn as_str(self) -> &'static str {
        match self {
            BuyDecision::Buy => "yes",
            BuyDecision::NoBuy => "no",
        }
    }
}

/// Buy when the house is below its zipcode median and in at least fair condition.
pub fn classify_buy(price: f64, condition: u8, median_for_zip: f64) -> BuyDecision {
    if price < median_for_zip && condition >= MIN_BUY_CONDITION {
        BuyDecision::Buy
    } else {
        BuyDecision::NoBuy
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SellValue {
    pub sell_value: f64,
    pub profit: f64,
}

/// 30% markup below the zipcode/season median, 10% at or above it.
pub fn compute_sell_value(price: f64, median_for_zip_season: f64) -> SellValue {
    let markup = if price < median_for_zip_season {
        DISCOUNT_MARKUP
    } else {
        STANDARD_MARKUP
    };

    SellValue {
        sell_value: price * (1.0 + markup),
        profit: price * markup,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuyRow {
    pub id: u64,
    pub zipcode: u32,
    pub price: f64,
    pub median_price: f64,
    pub condition: u8,
    pub buy: BuyDecision,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SellRow {
    pub id: u64,
    pub zipcode: u32,
    pub season: Season,
    pub median_zipcode_season: f64,
    pub price: f64,
    pub sell_value: f64,
    pub profit: f64,
}

fn classify_listings(listings: &[Listing]) -> Vec<(&Listing, f64, BuyDecision)> {
    let medians = group_median_by_key(listings, |l| l.zipcode);

    join_aggregate_back(listings, &medians, |l| l.zipcode)
        .into_iter()
        .map(|(l, median)| (l, median, classify_buy(l.price, l.condition, median)))
        .collect()
}

/// "Houses to Buy": every listing with its zipcode median and decision.
pub fn buy_report(listings: &[Listing]) -> Vec<BuyRow> {
    classify_listings(listings)
        .into_iter()
        .map(|(l, median, buy)| BuyRow {
            id: l.id,
            zipcode: l.zipcode,
            price: l.price,
            median_price: median,
            condition: l.condition,
            buy,
        })
        .collect()
}

/// "Houses to Sell": the bought listings priced against the median of their
/// zipcode and season. The median is taken over the bought subset only.
pub fn sell_report(listings: &[Listing]) -> Vec<SellRow> {
    let bought: Vec<&Listing> = classify_listings(listings)
        .into_iter()
        .filter(|(_, _, buy)| *buy == BuyDecision::Buy)
        .map(|(l, _, _)| l)
        .collect();

    let zip_season = |l: &Listing| (l.zipcode, classify_season(l.date));
    let medians = group_median_by_key(&bought, zip_season);

    join_aggregate_back(&bought, &medians, zip_season)
        .into_iter()
        .map(|(l, median)| {
            let value = compute_sell_value(l.price, median);
            SellRow {
                id: l.id,
                zipcode: l.zipcode,
                season: classify_season(l.date),
                median_zipcode_season: median,
                price: l.price,
                sell_value: value.sell_value,
                profit: value.profit,
            }
        })
        .collect()
}
