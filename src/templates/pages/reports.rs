use crate::analysis::{BuyDecision, BuyRow, SellRow};
use crate::templates::components::{card, fmt_num, row_cap_note};
use maud::{html, Markup};

pub struct ReportsVm<'a> {
    pub buy: &'a [BuyRow],
    pub sell: &'a [SellRow],
    /// Cap on rendered rows per table.
    pub row_cap: usize,
}

pub fn reports_section(vm: &ReportsVm) -> Markup {
    let buy_count = vm.buy.iter().filter(|r| r.buy == BuyDecision::Buy).count();

    html! {
        (card("Houses to Buy Report", html! {
            p class="muted" {
                (buy_count) " of " (vm.buy.len()) " houses are below their zipcode median and in condition 3 or better. "
                a href="/export/buy.xlsx" { "Download xlsx" }
            }
            div class="table-wrap" {
                table id="buy-table" {
                    thead {
                        tr {
                            th { "id" }
                            th { "zipcode" }
                            th { "price" }
                            th { "median_price" }
                            th { "condition" }
                            th { "buy" }
                        }
                    }
                    tbody {
                        @for r in vm.buy.iter().take(vm.row_cap) {
                            tr {
                                td { (r.id) }
                                td { (r.zipcode) }
                                td class="num" { (fmt_num(r.price)) }
                                td class="num" { (fmt_num(r.median_price)) }
                                td class="num" { (r.condition) }
                                td { (r.buy.as_str()) }
                            }
                        }
                    }
                }
            }
            (row_cap_note(vm.buy.len().min(vm.row_cap), vm.buy.len()))
        }))

        (card("Houses to Sell Report", html! {
            p class="muted" {
                "Bought houses priced against the median of their zipcode and season. "
                a href="/export/sell.xlsx" { "Download xlsx" }
            }
            div class="table-wrap" {
                table id="sell-table" {
                    thead {
                        tr {
                            th { "id" }
                            th { "zipcode" }
                            th { "season" }
                            th { "median_zipcode_season" }
                            th { "price" }
                            th { "sell_value" }
                            th { "profit" }
                        }
                    }
                    tbody {
                        @for r in vm.sell.iter().take(vm.row_cap) {
                            tr {
                                td { (r.id) }
                                td { (r.zipcode) }
                                td { (r.season.as_str()) }
                                td class="num" { (fmt_num(r.median_zipcode_season)) }
                                td class="num" { (fmt_num(r.price)) }
                                td class="num" { (fmt_num(r.sell_value)) }
                                td class="num" { (fmt_num(r.profit)) }
                            }
                        }
                    }
                }
            }
            (row_cap_note(vm.sell.len().min(vm.row_cap), vm.sell.len()))
        }))
    }
}
