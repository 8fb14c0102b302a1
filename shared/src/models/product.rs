//! Product Model

use serde::{Deserialize, Serialize};

/// Product entity
///
/// Owned by the backend; the client treats it as read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub brand: String,
    /// Unit price in currency units
    pub price: f64,
}
