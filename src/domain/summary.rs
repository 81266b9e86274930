use crate::api::models::OrderSummary;
use crate::domain::order::{sort_most_recent_first, Order};

/// Sum of every order's grand total; orders without one count as zero.
pub fn revenue_total(orders: &[Order]) -> f64 {
    orders.iter().map(Order::grand_total).sum()
}

/// Figures behind the dashboard cards and its "latest orders" table.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub total_orders: u64,
    pub total_revenue: f64,
    pub latest: Vec<Order>,
}

impl DashboardSummary {
    pub fn new(summary: Option<&OrderSummary>, orders: &[Order]) -> Self {
        let mut latest = orders.to_vec();
        sort_most_recent_first(&mut latest);

        Self {
            total_orders: summary.map(|s| s.total_orders).unwrap_or(0),
            total_revenue: summary.map(|s| s.total_revenue).unwrap_or(0.0),
            latest,
        }
    }
}

/// The revenue screen: every fetched order, in fetch order, and their total.
#[derive(Debug, Clone, PartialEq)]
pub struct RevenueReport<'a> {
    pub total: f64,
    pub orders: Vec<&'a Order>,
}

impl<'a> RevenueReport<'a> {
    pub fn new(orders: &'a [Order]) -> Self {
        Self {
            total: revenue_total(orders),
            orders: orders.iter().collect(),
        }
    }
}
