use crate::analysis::ColumnSummary;
use crate::dataset::{Column, Listing};
use crate::templates::components::{card, fmt_opt, row_cap_note};
use crate::templates::pages::Filters;
use maud::{html, Markup};

pub struct DataVm<'a> {
    pub rows: &'a [Listing],
    pub total: usize,
    pub summary: Vec<ColumnSummary>,
}

pub fn data_section(vm: &DataVm, filters: &Filters, action: &str) -> Markup {
    html! {
        (card("Data", html! {
            form class="filters" method="get" action=(action) {
                label for="columns" { "Enter columns:" }
                select id="columns" name="columns" multiple size="8" {
                    @for c in Column::ALL {
                        option value=(c.name()) selected[filters.columns.contains(&c)] { (c.name()) }
                    }
                }
                input type="hidden" name="price" value=(filters.threshold);
                button type="submit" { "Apply" }
            }

            div class="table-wrap" {
                table id="data-table" {
                    thead {
                        tr {
                            @for c in &filters.columns {
                                th { (c.name()) }
                            }
                        }
                    }
                    tbody {
                        @for l in vm.rows {
                            tr {
                                @for c in &filters.columns {
                                    td class=[c.is_numeric().then_some("num")] { (c.display(l)) }
                                }
                            }
                        }
                    }
                }
            }
            (row_cap_note(vm.rows.len(), vm.total))
        }))

        (card("Descriptive Analysis", html! {
            div class="table-wrap" {
                table id="describe-table" {
                    thead {
                        tr {
                            th { "" }
                            th { "count" }
                            th { "mean" }
                            th { "std" }
                            th { "min" }
                            th { "25%" }
                            th { "50%" }
                            th { "75%" }
                            th { "max" }
                        }
                    }
                    tbody {
                        @for s in &vm.summary {
                            tr {
                                th { (s.column) }
                                td class="num" { (s.count) }
                                td class="num" { (fmt_opt(s.mean)) }
                                td class="num" { (fmt_opt(s.std)) }
                                td class="num" { (fmt_opt(s.min)) }
                                td class="num" { (fmt_opt(s.q25)) }
                                td class="num" { (fmt_opt(s.q50)) }
                                td class="num" { (fmt_opt(s.q75)) }
                                td class="num" { (fmt_opt(s.max)) }
                            }
                        }
                    }
                }
            }
        }))
    }
}
