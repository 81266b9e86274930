use crate::api::AdminUser;
use crate::domain::{format_amount, DashboardSummary, Order};
use crate::screens::FetchState;
use crate::templates::components::table::{AMOUNT, CUSTOMER};
use crate::templates::components::{
    error_message, orders_table, stat_card, stat_card_skeleton, table_skeleton, Column,
};
use crate::templates::layouts::{desktop_layout, Nav};
use maud::{html, Markup};

const ITEMS: Column = Column {
    label: "Items",
    render: view_items_cell,
};

/// Page shell; the figures arrive through `/dashboard/content`.
pub fn dashboard_page(user: Option<&AdminUser>) -> Markup {
    desktop_layout(
        "Dashboard",
        Nav::Dashboard,
        user,
        html! {
            div id="dashboard-content"
                hx-get="/dashboard/content"
                hx-trigger="load"
                hx-swap="outerHTML"
            {
                (dashboard_skeleton())
            }
        },
    )
}

pub fn dashboard_content(state: &FetchState<DashboardSummary>) -> Markup {
    html! {
        div id="dashboard-content" {
            @match state {
                FetchState::Failed => { (error_message("Failed to load dashboard data")) }
                FetchState::Loading => { (dashboard_skeleton()) }
                FetchState::Loaded(summary) => {
                    div class="stats" {
                        (stat_card("Total Orders", &summary.total_orders.to_string()))
                        (stat_card("Total Revenue", &format_amount(summary.total_revenue)))
                    }

                    section style="margin-top: 1.5rem;" {
                        h2 { "Latest 10 Orders" }
                        @let rows: Vec<&Order> = summary.latest.iter().collect();
                        (orders_table(&[CUSTOMER, ITEMS, AMOUNT], &rows))
                    }
                }
            }
        }
    }
}

/// Order detail popup, swapped into `#modal`.
pub fn order_modal(order: &Order) -> Markup {
    modal_shell(html! {
        h2 { "Order Details" }
        p class="muted" { "Customer: " (order.customer_label()) }

        div style="max-height: 15rem; overflow-y: auto;" {
            @if order.items().is_empty() {
                p class="muted" { "No items found" }
            } @else {
                @for item in order.items() {
                    div class="card" style="display: flex; justify-content: space-between; margin-bottom: .5rem;" {
                        div {
                            p { (item.name_label()) }
                            p class="muted" { "Qty: " (item.quantity_label()) }
                        }
                        strong { "× " (item.quantity_label()) }
                    }
                }
            }
        }

        div style="display: flex; justify-content: space-between; border-top: 1px solid #e5e7eb; margin-top: 1.5rem; padding-top: 1rem;" {
            span class="muted" { "Grand Total" }
            strong { (order.amount_label()) }
        }
    })
}

/// Same popup with only a message, for lookups that came back empty-handed.
pub fn order_modal_error(message: &str) -> Markup {
    modal_shell(html! {
        h2 { "Order Details" }
        (error_message(message))
    })
}

fn modal_shell(content: Markup) -> Markup {
    html! {
        div class="overlay" onclick="if (event.target === this) this.parentNode.innerHTML = ''" {
            div class="modal" {
                button type="button" style="position: absolute; top: 1rem; right: 1rem;"
                    onclick="document.getElementById('modal').innerHTML = ''"
                { "✕" }

                (content)
            }
        }
    }
}

fn view_items_cell(order: &Order) -> Markup {
    html! {
        @if let Some(id) = order.id() {
            @let href: String = url::form_urlencoded::Serializer::new(String::from("/dashboard/order?"))
                .append_pair("id", id)
                .finish();
            button type="button" hx-get=(href) hx-target="#modal" hx-swap="innerHTML" { "View" }
        } @else {
            span class="muted" { "N/A" }
        }
    }
}

fn dashboard_skeleton() -> Markup {
    html! {
        div class="stats" {
            (stat_card_skeleton())
            (stat_card_skeleton())
        }
        section style="margin-top: 1.5rem;" {
            h2 { "Latest 10 Orders" }
            (table_skeleton(6))
        }
    }
}
