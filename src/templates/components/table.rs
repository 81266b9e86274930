use crate::domain::Order;
use maud::{html, Markup};

/// One column of an order table: header label plus cell renderer.
#[derive(Clone, Copy)]
pub struct Column {
    pub label: &'static str,
    pub render: fn(&Order) -> Markup,
}

pub const CUSTOMER: Column = Column {
    label: "Customer",
    render: customer_cell,
};

pub const AMOUNT: Column = Column {
    label: "Amount",
    render: amount_cell,
};

pub const DATE: Column = Column {
    label: "Date",
    render: date_cell,
};

fn customer_cell(order: &Order) -> Markup {
    html! { (order.customer_label()) }
}

fn amount_cell(order: &Order) -> Markup {
    html! { (order.amount_label()) }
}

fn date_cell(order: &Order) -> Markup {
    html! { (order.created_label()) }
}

pub fn orders_table(columns: &[Column], rows: &[&Order]) -> Markup {
    html! {
        @if rows.is_empty() {
            div class="card empty" { "No orders found" }
        } @else {
            div class="card" style="overflow-x: auto; padding: 0;" {
                table {
                    thead {
                        tr {
                            @for col in columns {
                                th { (col.label) }
                            }
                        }
                    }
                    tbody {
                        @for row in rows {
                            tr {
                                @for col in columns {
                                    td { ((col.render)(row)) }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
