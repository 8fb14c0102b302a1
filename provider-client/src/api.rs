//! Typed endpoint surface of the storefront backend

use async_trait::async_trait;

use shared::models::{Order, OrderCreate, Product};

use crate::{ClientResult, RestClient};

/// Storefront REST surface
///
/// Dyn-compatible so the same board can drive the network client, an
/// in-process backend, or a test double.
#[async_trait]
pub trait StoreApi: Send + Sync {
    /// `GET /products`
    async fn fetch_products(&self) -> ClientResult<Vec<Product>>;

    /// `GET /orders`
    async fn fetch_orders(&self) -> ClientResult<Vec<Order>>;

    /// `POST /orders`
    async fn create_order(&self, draft: &OrderCreate) -> ClientResult<Order>;

    /// `PUT /orders/{id}`
    async fn update_order(&self, order: &Order) -> ClientResult<Order>;

    /// `DELETE /orders/{id}`
    async fn delete_order(&self, order_id: i64) -> ClientResult<()>;
}

#[async_trait]
impl StoreApi for RestClient {
    async fn fetch_products(&self) -> ClientResult<Vec<Product>> {
        self.get("products").await
    }

    async fn fetch_orders(&self) -> ClientResult<Vec<Order>> {
        self.get("orders").await
    }

    async fn create_order(&self, draft: &OrderCreate) -> ClientResult<Order> {
        self.post("orders", draft).await
    }

    async fn update_order(&self, order: &Order) -> ClientResult<Order> {
        self.put(&format!("orders/{}", order.id), order).await
    }

    async fn delete_order(&self, order_id: i64) -> ClientResult<()> {
        self.delete(&format!("orders/{}", order_id)).await
    }
}
