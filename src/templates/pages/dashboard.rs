use crate::analysis::HypothesisReport;
use crate::templates::desktop_layout;
use crate::templates::pages::{
    data_section, hypotheses_section, map_section, reports_section, DataVm, Filters, MapVm,
    ReportsVm,
};
use maud::{html, Markup};

pub struct DashboardVm<'a> {
    pub source: &'a str,
    pub listing_count: usize,
    pub filters: Filters,
    pub map: MapVm<'a>,
    pub data: DataVm<'a>,
    pub reports: ReportsVm<'a>,
    pub hypotheses: Vec<HypothesisReport>,
}

/// Every section on one scrolling page.
pub fn dashboard_page(vm: &DashboardVm) -> Markup {
    desktop_layout(
        "House Rocket Dashboard",
        html! {
            h1 { "House Rocket Dashboard" }
            p class="muted" { (vm.listing_count) " sales loaded from " code { (vm.source) } }

            (map_section(&vm.map, &vm.filters, "/"))
            (data_section(&vm.data, &vm.filters, "/"))
            (reports_section(&vm.reports))
            (hypotheses_section(&vm.hypotheses))
        },
    )
}

/// A single section inside the standard layout.
pub fn section_page(title: &str, content: Markup) -> Markup {
    desktop_layout(
        title,
        html! {
            (content)
        },
    )
}
