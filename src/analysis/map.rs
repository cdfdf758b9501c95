// src/analysis/map.rs
use crate::analysis::aggregate::mean;
use crate::dataset::Listing;

/// Slider bounds for the map filter, truncated to whole dollars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub min: i64,
    pub max: i64,
    pub mean: i64,
}

impl PriceRange {
    pub fn of(listings: &[Listing]) -> Option<Self> {
        let prices: Vec<f64> = listings.iter().map(|l| l.price).collect();
        let min = prices.iter().copied().reduce(f64::min)?;
        let max = prices.iter().copied().reduce(f64::max)?;

        Some(Self {
            min: min as i64,
            max: max as i64,
            mean: mean(&prices)? as i64,
        })
    }

    /// Requested threshold clamped into the slider range; the mean when absent.
    pub fn threshold(&self, requested: Option<i64>) -> i64 {
        requested.unwrap_or(self.mean).clamp(self.min, self.max)
    }
}

/// Listings strictly below the price threshold.
pub fn listings_below(listings: &[Listing], threshold: i64) -> Vec<&Listing> {
    listings
        .iter()
        .filter(|l| l.price < threshold as f64)
        .collect()
}

/// Equirectangular projection of a lat/long bounding box onto a `width` x `height` viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    min_lat: f64,
    max_lat: f64,
    min_long: f64,
    max_long: f64,
    width: f64,
    height: f64,
}

impl Projection {
    pub fn fit<'a, I>(points: I, width: f64, height: f64) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Listing>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut p = Self {
            min_lat: first.lat,
            max_lat: first.lat,
            min_long: first.long,
            max_long: first.long,
            width,
            height,
        };
        for l in iter {
            p.min_lat = p.min_lat.min(l.lat);
            p.max_lat = p.max_lat.max(l.lat);
            p.min_long = p.min_long.min(l.long);
            p.max_long = p.max_long.max(l.long);
        }
        Some(p)
    }

    /// Viewport coordinates; north is up. A degenerate box maps to the centre.
    pub fn project(&self, lat: f64, long: f64) -> (f64, f64) {
        let span_long = self.max_long - self.min_long;
        let span_lat = self.max_lat - self.min_lat;

        let x = if span_long > 0.0 {
            (long - self.min_long) / span_long * self.width
        } else {
            self.width / 2.0
        };
        let y = if span_lat > 0.0 {
            (self.max_lat - lat) / span_lat * self.height
        } else {
            self.height / 2.0
        };
        (x, y)
    }
}

/// Position of `price` within the range, 0.0 to 1.0. Drives marker size and colour.
pub fn price_weight(price: f64, range: &PriceRange) -> f64 {
    let span = (range.max - range.min) as f64;
    if span <= 0.0 {
        return 0.5;
    }
    ((price - range.min as f64) / span).clamp(0.0, 1.0)
}
