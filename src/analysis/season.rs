// src/analysis/season.rs

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;

/// Northern Hemisphere season. Ordering is calendar order starting in winter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Autumn,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Winter, Season::Spring, Season::Summer, Season::Autumn];

    pub fn as_str(self) -> &'static str {
        match self {
            Season::Winter => "winter",
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Quarter-of-year seasons, moved forward on the fixed solstice/equinox days
/// (Mar 20, Jun 21, Sep 22, Dec 21). Same boundaries every year.
pub fn classify_season(date: NaiveDate) -> Season {
    match (date.month(), date.day()) {
        (3, 20..) => Season::Spring,
        (6, 21..) => Season::Summer,
        (9, 22..) => Season::Autumn,
        (12, 21..) => Season::Winter,
        (1..=3, _) => Season::Winter,
        (4..=6, _) => Season::Spring,
        (7..=9, _) => Season::Summer,
        _ => Season::Autumn,
    }
}
