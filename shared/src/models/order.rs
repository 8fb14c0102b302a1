//! Order Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A product annotated with its ordered quantity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Product reference
    pub id: i64,
    pub name: String,
    pub brand: String,
    /// Unit price in currency units
    pub price: f64,
    pub quantity: u32,
}

impl OrderLine {
    /// Line subtotal (price × quantity)
    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Sum of price × quantity over the given lines
///
/// Totals are always derived from the lines, never carried separately.
pub fn line_total(lines: &[OrderLine]) -> f64 {
    lines.iter().map(OrderLine::subtotal).sum()
}

/// Create order payload
///
/// Built transiently at submission time; never stored client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCreate {
    /// Ordering client reference (`id_client` on the wire)
    #[serde(rename = "id_client")]
    pub client_id: String,
    pub products: Vec<OrderLine>,
    /// Total amount in currency units, derived from the lines
    pub total: f64,
    pub order_date: DateTime<Utc>,
    pub is_accepted: bool,
}

/// Order entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    /// Ordering client reference (`id_client` on the wire)
    #[serde(rename = "id_client")]
    pub client_id: String,
    pub products: Vec<OrderLine>,
    /// Total amount in currency units
    pub total: f64,
    pub order_date: DateTime<Utc>,
    pub is_accepted: bool,
}
