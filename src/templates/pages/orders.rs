use crate::api::AdminUser;
use crate::screens::{FetchState, OrderListSnapshot};
use crate::templates::components::table::{AMOUNT, CUSTOMER, DATE};
use crate::templates::components::{
    error_message, orders_table, stat_card, stat_card_skeleton, table_skeleton,
};
use crate::templates::layouts::{desktop_layout, Nav};
use maud::{html, Markup};
use url::form_urlencoded;

/// "All Orders" shell: search box plus a table region loaded over htmx.
pub fn orders_page(user: Option<&AdminUser>, search_term: &str) -> Markup {
    desktop_layout(
        "My Orders",
        Nav::Orders,
        user,
        html! {
            div style="margin-bottom: 1rem;" {
                input type="search" name="q" value=(search_term)
                    placeholder="Search by customer name"
                    hx-get="/myorders/table"
                    hx-trigger="input changed delay:300ms, search"
                    hx-target="#orders-table"
                    hx-swap="innerHTML";
            }

            div id="orders-table"
                hx-get="/myorders/table"
                hx-trigger="load"
                hx-include="[name='q']"
            {
                (orders_skeleton())
            }
        },
    )
}

pub fn orders_table_fragment(state: &FetchState<OrderListSnapshot<'_>>) -> Markup {
    match state {
        FetchState::Failed => error_message("Failed to load orders"),
        FetchState::Loading => orders_skeleton(),
        FetchState::Loaded(snapshot) => loaded(snapshot),
    }
}

fn loaded(snapshot: &OrderListSnapshot<'_>) -> Markup {
    let visible = &snapshot.visible;
    let total_pages = visible.total_pages.max(1);

    html! {
        div class="stats" {
            (stat_card("Total Orders", &snapshot.total_count.to_string()))
        }

        div style="margin: 1.5rem 0;" {
            h2 { "All Orders" }
            p class="muted" {
                "Showing " (visible.rows.len()) " of " (visible.total_filtered) " orders"
            }
        }

        (orders_table(&[CUSTOMER, AMOUNT, DATE], &visible.rows))

        div class="pager" {
            button type="button"
                hx-get=(page_href(snapshot.search_term, visible.page.saturating_sub(1)))
                hx-target="#orders-table"
                disabled[visible.page <= 1]
            { "Previous" }

            span { "Page " (visible.page) " of " (total_pages) }

            button type="button"
                hx-get=(page_href(snapshot.search_term, visible.page + 1))
                hx-target="#orders-table"
                disabled[visible.page >= total_pages]
            { "Next" }
        }
    }
}

fn page_href(search_term: &str, page: usize) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("q", search_term)
        .append_pair("page", &page.to_string())
        .finish();
    format!("/myorders/table?{query}")
}

fn orders_skeleton() -> Markup {
    html! {
        div class="stats" {
            (stat_card_skeleton())
        }
        div style="margin-top: 1.5rem;" {
            (table_skeleton(6))
        }
    }
}
