use crate::config::Config;
use crate::dataset::{Dataset, Listing};
use crate::state::AppState;
use chrono::NaiveDate;

pub const CSV_HEADER: &str =
    "id,date,price,bedrooms,bathrooms,sqft_living,sqft_lot,floors,waterfront,condition,yr_built,sqft_basement,zipcode,lat,long";

/// Eight sales across two zipcodes, shaped after the King County export.
pub fn fixture_csv() -> String {
    let rows = [
        "7129300520,20141013T000000,221900.0,3,1.00,1180,5650,1,0,3,1955,0,98178,47.5112,-122.257",
        "6414100192,20141209T000000,538000.0,3,2.25,2570,7242,2,0,3,1951,400,98125,47.7210,-122.319",
        "5631500400,20150225T000000,180000.0,2,1.00,770,10000,1,0,3,1933,0,98178,47.7379,-122.233",
        "2487200875,20150310T000000,604000.0,4,3.00,1960,5000,1,0,5,1965,910,98125,47.5208,-122.393",
        "1954400510,20150521T000000,510000.0,3,3.00,1680,8080,1,1,3,1987,0,98178,47.6168,-122.045",
        "7237550310,20140512T000000,1225000.0,4,3.00,5420,101930,1,0,3,2001,1530,98125,47.6561,-122.005",
        "1321400060,20150427T000000,257500.0,3,2.25,1715,6819,2,0,2,1995,0,98178,47.3097,-122.327",
        "2008000270,20150115T000000,291850.0,3,1.50,1060,9711,1,1,3,1963,0,98125,47.4095,-122.315",
    ];

    let mut csv = String::from(CSV_HEADER);
    for row in rows {
        csv.push('\n');
        csv.push_str(row);
    }
    csv.push('\n');
    csv
}

pub fn fixture_dataset() -> Dataset {
    Dataset::from_bytes(fixture_csv().as_bytes(), "fixture")
        .unwrap_or_else(|e| panic!("Fixture failed to load: {e}"))
}

/// A plain listing to tweak with struct update syntax.
pub fn listing(id: u64, date: (i32, u32, u32), price: f64) -> Listing {
    Listing {
        id,
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        price,
        bedrooms: 3,
        bathrooms: 2.0,
        sqft_living: 1500,
        sqft_lot: 5000,
        floors: 1.0,
        waterfront: false,
        view: None,
        condition: 3,
        grade: None,
        sqft_above: None,
        sqft_basement: 0,
        yr_built: 1990,
        yr_renovated: None,
        zipcode: 98001,
        lat: 47.5,
        long: -122.2,
        sqft_living15: None,
        sqft_lot15: None,
    }
}

pub fn test_state() -> AppState {
    AppState::new(fixture_dataset(), Config::default())
}
