use crate::api::AdminUser;
use crate::domain::{format_amount, RevenueReport};
use crate::screens::FetchState;
use crate::templates::components::table::{Column, AMOUNT, CUSTOMER, DATE};
use crate::templates::components::{
    error_message, orders_table, stat_card, stat_card_skeleton, table_skeleton,
};
use crate::templates::layouts::{desktop_layout, Nav};
use maud::{html, Markup};

const CUSTOMER_NAME: Column = Column {
    label: "Customer Name",
    ..CUSTOMER
};

pub fn revenue_page(user: Option<&AdminUser>) -> Markup {
    desktop_layout(
        "Total Revenue",
        Nav::Revenue,
        user,
        html! {
            div id="revenue-content"
                hx-get="/totalrevenue/content"
                hx-trigger="load"
                hx-swap="outerHTML"
            {
                (stat_card_skeleton())
                (table_skeleton(6))
            }
        },
    )
}

pub fn revenue_content(state: &FetchState<RevenueReport<'_>>) -> Markup {
    html! {
        div id="revenue-content" {
            @match state {
                FetchState::Failed => { (error_message("Failed to load orders")) }
                FetchState::Loading => {
                    (stat_card_skeleton())
                    (table_skeleton(6))
                }
                FetchState::Loaded(report) => {
                    @let total = format_amount(report.total);
                    div class="stats" {
                        (stat_card("Total Revenue", &total))
                    }

                    div style="display: flex; justify-content: space-between; align-items: center; margin: 1.5rem 0;" {
                        div {
                            h2 { "Total Revenue" }
                            p class="muted" { "View all earnings" }
                        }
                        div class="card" {
                            strong { "Total: " (total) }
                        }
                    }

                    (orders_table(&[CUSTOMER_NAME, AMOUNT, DATE], &report.orders))
                }
            }
        }
    }
}
