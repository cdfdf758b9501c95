// src/dataset/listing.rs

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// One sale record from the King County export.
///
/// The first fifteen columns are required. The remaining ones belong to the
/// full export and are kept when present; unknown columns are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Listing {
    pub id: u64,
    #[serde(deserialize_with = "deserialize_sale_date")]
    pub date: NaiveDate,
    pub price: f64,
    pub bedrooms: u32,
    pub bathrooms: f64,
    pub sqft_living: u32,
    pub sqft_lot: u32,
    pub floors: f64,
    #[serde(deserialize_with = "deserialize_flag")]
    pub waterfront: bool,
    #[serde(default)]
    pub view: Option<u8>,
    pub condition: u8,
    #[serde(default)]
    pub grade: Option<u8>,
    #[serde(default)]
    pub sqft_above: Option<u32>,
    pub sqft_basement: u32,
    pub yr_built: i32,
    #[serde(default)]
    pub yr_renovated: Option<i32>,
    pub zipcode: u32,
    pub lat: f64,
    pub long: f64,
    #[serde(default)]
    pub sqft_living15: Option<u32>,
    #[serde(default)]
    pub sqft_lot15: Option<u32>,
}

/// Accepts `20141013T000000` (the King County format), `2014-10-13`
/// and `2014-10-13 00:00:00`.
pub fn parse_sale_date(raw: &str) -> Result<NaiveDate, String> {
    let raw = raw.trim();

    NaiveDateTime::parse_from_str(raw, "%Y%m%dT%H%M%S")
        .map(|dt| dt.date())
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").map(|dt| dt.date()))
        .map_err(|_| format!("unrecognised date '{raw}'"))
}

fn deserialize_sale_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_sale_date(&raw).map_err(serde::de::Error::custom)
}

// 0/1 in the export, but accept true/false too.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "1.0" | "true" => Ok(true),
        "0" | "0.0" | "false" => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "expected a 0/1 flag, got '{other}'"
        ))),
    }
}

/// A displayable column of the listing table, in file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Id,
    Date,
    Price,
    Bedrooms,
    Bathrooms,
    SqftLiving,
    SqftLot,
    Floors,
    Waterfront,
    View,
    Condition,
    Grade,
    SqftAbove,
    SqftBasement,
    YrBuilt,
    YrRenovated,
    Zipcode,
    Lat,
    Long,
    SqftLiving15,
    SqftLot15,
}

impl Column {
    pub const ALL: [Column; 21] = [
        Column::Id,
        Column::Date,
        Column::Price,
        Column::Bedrooms,
        Column::Bathrooms,
        Column::SqftLiving,
        Column::SqftLot,
        Column::Floors,
        Column::Waterfront,
        Column::View,
        Column::Condition,
        Column::Grade,
        Column::SqftAbove,
        Column::SqftBasement,
        Column::YrBuilt,
        Column::YrRenovated,
        Column::Zipcode,
        Column::Lat,
        Column::Long,
        Column::SqftLiving15,
        Column::SqftLot15,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Column::Id => "id",
            Column::Date => "date",
            Column::Price => "price",
            Column::Bedrooms => "bedrooms",
            Column::Bathrooms => "bathrooms",
            Column::SqftLiving => "sqft_living",
            Column::SqftLot => "sqft_lot",
            Column::Floors => "floors",
            Column::Waterfront => "waterfront",
            Column::View => "view",
            Column::Condition => "condition",
            Column::Grade => "grade",
            Column::SqftAbove => "sqft_above",
            Column::SqftBasement => "sqft_basement",
            Column::YrBuilt => "yr_built",
            Column::YrRenovated => "yr_renovated",
            Column::Zipcode => "zipcode",
            Column::Lat => "lat",
            Column::Long => "long",
            Column::SqftLiving15 => "sqft_living15",
            Column::SqftLot15 => "sqft_lot15",
        }
    }

    pub fn from_name(name: &str) -> Option<Column> {
        Column::ALL.into_iter().find(|c| c.name() == name)
    }

    /// Resolve a multiselect submission. An empty selection means every column.
    pub fn parse_list<S: AsRef<str>>(names: &[S]) -> Result<Vec<Column>, String> {
        if names.is_empty() {
            return Ok(Column::ALL.to_vec());
        }

        let mut out = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref().trim();
            let column = Column::from_name(name).ok_or_else(|| format!("unknown column '{name}'"))?;
            if !out.contains(&column) {
                out.push(column);
            }
        }
        Ok(out)
    }

    /// Numeric value of this column, `None` for the date column and for absent optional fields.
    pub fn value(self, l: &Listing) -> Option<f64> {
        match self {
            Column::Id => Some(l.id as f64),
            Column::Date => None,
            Column::Price => Some(l.price),
            Column::Bedrooms => Some(l.bedrooms as f64),
            Column::Bathrooms => Some(l.bathrooms),
            Column::SqftLiving => Some(l.sqft_living as f64),
            Column::SqftLot => Some(l.sqft_lot as f64),
            Column::Floors => Some(l.floors),
            Column::Waterfront => Some(if l.waterfront { 1.0 } else { 0.0 }),
            Column::View => l.view.map(f64::from),
            Column::Condition => Some(l.condition as f64),
            Column::Grade => l.grade.map(f64::from),
            Column::SqftAbove => l.sqft_above.map(f64::from),
            Column::SqftBasement => Some(l.sqft_basement as f64),
            Column::YrBuilt => Some(l.yr_built as f64),
            Column::YrRenovated => l.yr_renovated.map(f64::from),
            Column::Zipcode => Some(l.zipcode as f64),
            Column::Lat => Some(l.lat),
            Column::Long => Some(l.long),
            Column::SqftLiving15 => l.sqft_living15.map(f64::from),
            Column::SqftLot15 => l.sqft_lot15.map(f64::from),
        }
    }

    pub fn is_numeric(self) -> bool {
        self != Column::Date
    }

    /// Cell text for the data table.
    pub fn display(self, l: &Listing) -> String {
        match self {
            Column::Date => l.date.format("%Y-%m-%d").to_string(),
            Column::Price => format!("{:.2}", l.price),
            Column::Bathrooms | Column::Floors => format!("{}", self.value(l).unwrap_or_default()),
            Column::Lat | Column::Long => format!("{:.4}", self.value(l).unwrap_or_default()),
            other => match other.value(l) {
                Some(v) => format!("{}", v as i64),
                None => String::new(),
            },
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
