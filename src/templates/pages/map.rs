use crate::analysis::PriceRange;
use crate::dataset::Listing;
use crate::templates::components::{card, price_map};
use crate::templates::pages::Filters;
use maud::{html, Markup};

pub struct MapVm<'a> {
    pub range: PriceRange,
    pub points: Vec<&'a Listing>,
}

pub fn map_section(vm: &MapVm, filters: &Filters, action: &str) -> Markup {
    card(
        "House Rocket Map",
        html! {
            form class="filters" method="get" action=(action) {
                label for="price" {
                    "Price Range: below " strong { "$" (filters.threshold) }
                }
                input
                    type="range"
                    id="price"
                    name="price"
                    min=(vm.range.min)
                    max=(vm.range.max)
                    value=(filters.threshold);
                // keep the data filter when the map filter changes
                @if !filters.all_columns() {
                    @for c in &filters.columns {
                        input type="hidden" name="columns" value=(c.name());
                    }
                }
                button type="submit" { "Apply" }
            }
            p class="muted" { (vm.points.len()) " houses below the selected price." }
            (price_map(&vm.points, &vm.range))
        },
    )
}
