pub mod export_xlsx;

pub use export_xlsx::{export_buy_report_xlsx, export_sell_report_xlsx};
