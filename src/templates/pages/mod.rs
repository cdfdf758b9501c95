use crate::dataset::Column;

pub mod dashboard;
pub mod data;
pub mod hypotheses;
pub mod map;
pub mod reports;

pub use dashboard::{dashboard_page, section_page, DashboardVm};
pub use data::{data_section, DataVm};
pub use hypotheses::hypotheses_section;
pub use map::{map_section, MapVm};
pub use reports::{reports_section, ReportsVm};

/// Widget state carried between the map and data forms.
#[derive(Debug, Clone, PartialEq)]
pub struct Filters {
    pub threshold: i64,
    pub columns: Vec<Column>,
}

impl Filters {
    pub fn all_columns(&self) -> bool {
        self.columns.len() == Column::ALL.len()
    }
}
