use crate::domain::order::Order;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Cache key and query string of `GET /api/orders`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageQuery {
    pub page: u32,
    pub limit: u32,
}

impl PageQuery {
    /// Both values are forced to at least 1.
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
        }
    }
}

/// Body of a successful `GET /api/orders`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrdersPage {
    #[serde(default, deserialize_with = "orders_or_empty")]
    pub data: Vec<Order>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
    #[serde(default)]
    pub summary: Option<OrderSummary>,
}

impl OrdersPage {
    /// `pagination.totalCount`, 0 when the API left it out.
    pub fn total_count(&self) -> u64 {
        self.pagination.as_ref().map(|p| p.total_count).unwrap_or(0)
    }

    pub fn find(&self, id: &str) -> Option<&Order> {
        self.data.iter().find(|order| order.id() == Some(id))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pagination {
    pub total_count: u64,
    pub total_pages: u32,
    pub current_page: u32,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderSummary {
    pub total_orders: u64,
    pub total_revenue: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub phone: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub user: Option<AdminUser>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AdminUser {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl AdminUser {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.phone.as_deref())
            .unwrap_or("Admin")
    }
}

/// Error payload the API sometimes attaches to non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
}

/// `data` that is not an array decodes as an empty list; array entries that
/// are not objects are dropped.
fn orders_or_empty<'de, D>(deserializer: D) -> Result<Vec<Order>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(Value::Array(items)) = Option::<Value>::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };

    Ok(items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<Order>(item) {
            Ok(order) => Some(order),
            Err(e) => {
                tracing::warn!(error = %e, "skipping order entry that is not an object");
                None
            }
        })
        .collect())
}
