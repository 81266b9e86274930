use maud::{html, Markup};

pub mod error;
pub mod table;

pub use error::html_error_response;
pub use table::{orders_table, Column};

pub fn stat_card(title: &str, value: &str) -> Markup {
    html! {
        div class="card stat" {
            p class="muted" { (title) }
            h2 { (value) }
        }
    }
}

pub fn stat_card_skeleton() -> Markup {
    html! {
        div class="card" {
            div class="skeleton" style="width: 6rem; height: 1.25rem;" {}
            div class="skeleton" style="width: 5rem; height: 2rem;" {}
        }
    }
}

/// Placeholder rows shown while a table fragment is loading.
pub fn table_skeleton(rows: usize) -> Markup {
    html! {
        div class="card" {
            @for _ in 0..rows {
                div style="display: flex; justify-content: space-between; gap: 1rem;" {
                    div class="skeleton" style="width: 25%;" {}
                    div class="skeleton" style="width: 16%;" {}
                    div class="skeleton" style="width: 16%;" {}
                }
            }
        }
    }
}

pub fn error_message(message: &str) -> Markup {
    html! {
        p class="error" { (message) }
    }
}
