use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

// order
//  ├── _id | id
//  ├── customer
//  │    ├── name
//  │    ├── phone
//  │    └── email
//  ├── items[]
//  │    ├── name
//  │    └── quantity
//  ├── grandTotal
//  └── createdAt

/// Placeholder shown wherever a field is missing from a fetched record.
pub const MISSING: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawOrder")]
pub struct Order {
    pub id: Option<String>,
    pub customer: Option<Customer>,
    pub items: Option<Vec<OrderItem>>,
    pub grand_total: Option<f64>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Customer {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OrderItem {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_quantity")]
    pub quantity: Option<u32>,
}

/// Wire shape of an order. Every field decodes to `None` rather than failing,
/// so one odd field never costs the whole record.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawOrder {
    #[serde(rename = "_id", default, deserialize_with = "lenient_string")]
    mongo_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    id: Option<String>,
    #[serde(default, deserialize_with = "lenient_customer")]
    customer: Option<Customer>,
    #[serde(default, deserialize_with = "lenient_items")]
    items: Option<Vec<OrderItem>>,
    #[serde(default, deserialize_with = "lenient_amount")]
    grand_total: Option<f64>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    created_at: Option<DateTime<Utc>>,
}

impl From<RawOrder> for Order {
    fn from(raw: RawOrder) -> Self {
        Self {
            id: raw.mongo_id.filter(|id| !id.is_empty()).or(raw.id),
            customer: raw.customer,
            items: raw.items,
            grand_total: raw.grand_total,
            created_at: raw.created_at,
        }
    }
}

impl OrderItem {
    pub fn name_label(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(MISSING)
    }

    pub fn quantity_label(&self) -> String {
        self.quantity
            .map(|qty| qty.to_string())
            .unwrap_or_else(|| MISSING.to_string())
    }
}

impl Order {
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    pub fn customer_name(&self) -> Option<&str> {
        self.customer.as_ref()?.name.as_deref()
    }

    /// Customer name as displayed in tables, `N/A` when absent or blank.
    pub fn customer_label(&self) -> &str {
        self.customer_name()
            .filter(|name| !name.is_empty())
            .unwrap_or(MISSING)
    }

    pub fn items(&self) -> &[OrderItem] {
        self.items.as_deref().unwrap_or_default()
    }

    pub fn grand_total(&self) -> f64 {
        self.grand_total.unwrap_or(0.0)
    }

    pub fn amount_label(&self) -> String {
        format_amount(self.grand_total())
    }

    pub fn created_label(&self) -> String {
        self.created_at
            .map(|ts| ts.format("%d/%m/%Y").to_string())
            .unwrap_or_else(|| MISSING.to_string())
    }

    /// Case-insensitive substring match on the customer name.
    ///
    /// `needle` must already be lowercased. An empty needle matches every order,
    /// a non-empty one never matches an order without a customer name.
    pub fn customer_matches(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        self.customer_name()
            .map(|name| name.to_lowercase().contains(needle))
            .unwrap_or(false)
    }
}

/// Stable sort, newest `created_at` first. Undated orders go last.
pub fn sort_most_recent_first(orders: &mut [Order]) {
    orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

/// Rupee amount without a trailing `.0` / `.x0`: `₹1500`, `₹99.5`.
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        return format!("₹{amount:.0}");
    }
    let fixed = format!("{amount:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    format!("₹{trimmed}")
}

fn lenient_value<'de, D>(deserializer: D) -> Result<Value, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.unwrap_or(Value::Null))
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match lenient_value(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn lenient_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let amount = match lenient_value(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(amount.filter(|a| a.is_finite()))
}

fn lenient_quantity<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match lenient_value(deserializer)? {
        Value::Number(n) => n.as_u64().and_then(|q| u32::try_from(q).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// An unpopulated reference (`"customer": "65f0..."`) has no name to show.
fn lenient_customer<'de, D>(deserializer: D) -> Result<Option<Customer>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match lenient_value(deserializer)? {
        value @ Value::Object(_) => serde_json::from_value(value).ok(),
        _ => None,
    })
}

/// Items decode one by one; an unreadable entry becomes a placeholder item.
fn lenient_items<'de, D>(deserializer: D) -> Result<Option<Vec<OrderItem>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match lenient_value(deserializer)? {
        Value::Array(items) => Some(
            items
                .into_iter()
                .map(|item| serde_json::from_value(item).unwrap_or_default())
                .collect(),
        ),
        _ => None,
    })
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match lenient_value(deserializer)? {
        Value::String(s) => DateTime::parse_from_rfc3339(&s)
            .map(|ts| ts.with_timezone(&Utc))
            .ok(),
        _ => None,
    })
}
