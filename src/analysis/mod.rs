pub mod aggregate;
pub mod describe;
pub mod hypotheses;
pub mod map;
pub mod reports;
pub mod season;

pub use describe::{describe, ColumnSummary};
pub use hypotheses::{evaluate_all, HypothesisReport, Verdict};
pub use map::{listings_below, PriceRange, Projection};
pub use reports::{buy_report, sell_report, BuyDecision, BuyRow, SellRow};
pub use season::{classify_season, Season};
