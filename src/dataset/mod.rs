pub mod listing;
pub mod loader;

pub use listing::{parse_sale_date, Column, Listing};
pub use loader::{Dataset, LoadError};
