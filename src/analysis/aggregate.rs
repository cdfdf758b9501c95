// src/analysis/aggregate.rs

//! Grouping primitives shared by the reports and hypothesis pipelines.
//!
//! Aggregates are plain `BTreeMap`s so iteration is always in ascending key
//! order. Nothing here caches: callers rebuild an aggregate from the listing
//! set they are about to classify.

use crate::dataset::Listing;
use std::borrow::Borrow;
use std::collections::BTreeMap;

/// Median with even/odd averaging. Sorts `values` in place.
pub fn median(values: &mut [f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);

    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        Some((values[mid - 1] + values[mid]) / 2.0)
    } else {
        Some(values[mid])
    }
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Bucket `value(listing)` by `key(listing)`.
pub fn group_values<L, K, FK, FV>(listings: &[L], key: FK, value: FV) -> BTreeMap<K, Vec<f64>>
where
    L: Borrow<Listing>,
    K: Ord,
    FK: Fn(&Listing) -> K,
    FV: Fn(&Listing) -> f64,
{
    let mut groups: BTreeMap<K, Vec<f64>> = BTreeMap::new();
    for l in listings {
        let l = l.borrow();
        groups.entry(key(l)).or_default().push(value(l));
    }
    groups
}

/// Median price per distinct key. Empty input gives an empty map.
pub fn group_median_by_key<L, K, F>(listings: &[L], key: F) -> BTreeMap<K, f64>
where
    L: Borrow<Listing>,
    K: Ord,
    F: Fn(&Listing) -> K,
{
    group_values(listings, key, |l| l.price)
        .into_iter()
        .filter_map(|(k, mut prices)| median(&mut prices).map(|m| (k, m)))
        .collect()
}

/// Mean of `value` per distinct key.
pub fn group_mean_by_key<L, K, FK, FV>(listings: &[L], key: FK, value: FV) -> BTreeMap<K, f64>
where
    L: Borrow<Listing>,
    K: Ord,
    FK: Fn(&Listing) -> K,
    FV: Fn(&Listing) -> f64,
{
    group_values(listings, key, value)
        .into_iter()
        .filter_map(|(k, values)| mean(&values).map(|m| (k, m)))
        .collect()
}

/// Inner join of each listing with its group's aggregate, in input order.
/// Listings whose key has no aggregate are dropped.
pub fn join_aggregate_back<'a, L, K, F>(
    listings: &'a [L],
    aggregate: &BTreeMap<K, f64>,
    key: F,
) -> Vec<(&'a Listing, f64)>
where
    L: Borrow<Listing>,
    K: Ord,
    F: Fn(&Listing) -> K,
{
    listings
        .iter()
        .map(Borrow::borrow)
        .filter_map(|l| aggregate.get(&key(l)).map(|agg| (l, *agg)))
        .collect()
}

/// Percentage change of `current` over `previous`. Division by zero is missing, not infinite.
pub fn pct_between(previous: f64, current: f64) -> Option<f64> {
    let pct = (current / previous - 1.0) * 100.0;
    pct.is_finite().then_some(pct)
}

/// Element-wise change from the preceding element. The first entry is always missing.
pub fn pct_change(values: &[f64]) -> Vec<Option<f64>> {
    let mut out = Vec::with_capacity(values.len());
    for (i, v) in values.iter().enumerate() {
        if i == 0 {
            out.push(None);
        } else {
            out.push(pct_between(values[i - 1], *v));
        }
    }
    out
}

/// Change computed along ascending value order, reported at each value's
/// original position. The smallest value gets a missing change.
pub fn pct_change_by_value(values: &[f64]) -> Vec<Option<f64>> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));

    let mut out = vec![None; values.len()];
    for pair in order.windows(2) {
        out[pair[1]] = pct_between(values[pair[0]], values[pair[1]]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::utils::listing;

    #[test]
    fn median_averages_even_counts() {
        assert_eq!(median(&mut [3.0, 1.0, 2.0]), Some(2.0));
        assert_eq!(median(&mut [4.0, 1.0, 3.0, 2.0]), Some(2.5));
        assert_eq!(median(&mut []), None);
    }

    #[test]
    fn single_group_median_is_the_plain_median() {
        let listings = vec![
            listing(1, (2014, 5, 1), 300.0),
            listing(2, (2014, 5, 2), 100.0),
            listing(3, (2014, 5, 3), 200.0),
            listing(4, (2014, 5, 4), 1000.0),
        ];

        let medians = group_median_by_key(&listings, |l| l.zipcode);
        assert_eq!(medians.len(), 1);
        assert_eq!(medians.get(&98001), Some(&250.0));
    }

    #[test]
    fn median_per_composite_key() {
        let listings = vec![
            Listing { zipcode: 1, ..listing(1, (2014, 5, 1), 100.0) },
            Listing { zipcode: 1, ..listing(2, (2014, 5, 1), 300.0) },
            Listing { zipcode: 1, ..listing(3, (2014, 8, 1), 50.0) },
            Listing { zipcode: 2, ..listing(4, (2014, 5, 1), 70.0) },
        ];

        let medians = group_median_by_key(&listings, |l| (l.zipcode, l.date.format("%m").to_string()));
        assert_eq!(medians.len(), 3);
        assert_eq!(medians[&(1, "05".to_string())], 200.0);
        assert_eq!(medians[&(1, "08".to_string())], 50.0);
        assert_eq!(medians[&(2, "05".to_string())], 70.0);
    }

    #[test]
    fn empty_input_gives_empty_aggregate() {
        let listings: Vec<Listing> = Vec::new();
        assert!(group_median_by_key(&listings, |l| l.zipcode).is_empty());
        assert!(group_mean_by_key(&listings, |l| l.zipcode, |l| l.price).is_empty());
    }

    #[test]
    fn join_keeps_input_order_and_drops_unmatched() {
        let listings = vec![
            Listing { zipcode: 2, ..listing(1, (2014, 5, 1), 10.0) },
            Listing { zipcode: 9, ..listing(2, (2014, 5, 1), 20.0) },
            Listing { zipcode: 1, ..listing(3, (2014, 5, 1), 30.0) },
        ];
        let mut aggregate = BTreeMap::new();
        aggregate.insert(1u32, 11.0);
        aggregate.insert(2u32, 22.0);

        let joined = join_aggregate_back(&listings, &aggregate, |l| l.zipcode);
        let ids: Vec<(u64, f64)> = joined.iter().map(|(l, agg)| (l.id, *agg)).collect();
        assert_eq!(ids, vec![(1, 22.0), (3, 11.0)]);
    }

    #[test]
    fn join_accepts_borrowed_listings() {
        let owned = vec![listing(1, (2014, 5, 1), 10.0), listing(2, (2014, 5, 1), 30.0)];
        let borrowed: Vec<&Listing> = owned.iter().collect();

        let medians = group_median_by_key(&borrowed, |l| l.zipcode);
        let joined = join_aggregate_back(&borrowed, &medians, |l| l.zipcode);
        assert!(joined.iter().all(|(_, m)| *m == 20.0));
    }

    #[test]
    fn pct_change_of_two_buckets() {
        let pct = pct_change(&[100.0, 150.0]);
        assert_eq!(pct[0], None);
        assert_eq!(pct[1], Some(50.0));
    }

    #[test]
    fn pct_change_from_zero_is_missing() {
        assert_eq!(pct_change(&[0.0, 10.0]), vec![None, None]);
        assert!(pct_change(&[]).is_empty());
    }

    #[test]
    fn pct_change_by_value_follows_value_order() {
        let pct = pct_change_by_value(&[300.0, 100.0, 150.0]);
        assert_eq!(pct[1], None);
        assert_eq!(pct[2], Some(50.0));
        assert_eq!(pct[0], Some(100.0));
    }
}
