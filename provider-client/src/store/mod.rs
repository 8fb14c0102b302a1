//! Order board - client-side synchronization with the storefront backend
//!
//! Holds the product catalog, the per-product quantity selection, and the
//! order list, and keeps them consistent with the server by re-fetching
//! the full order list after every successful mutation. Local copies are
//! replaced wholesale on reload; there is no incremental merge.
//!
//! Every operation takes `&mut self`, so a mutation and its follow-up
//! reload form one logical transaction and responses cannot apply out of
//! order.

mod editor;

pub use editor::OrderEditor;

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;

use shared::client::UserInfo;
use shared::models::{line_total, Order, OrderCreate, OrderLine, Product};

use crate::api::StoreApi;
use crate::error::ClientError;

/// Error surfaced to the view in place of content
///
/// One variant per operation; writes surface errors the same way reads
/// do. Cleared by the next successful operation.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to load products")]
    CatalogUnavailable(#[source] ClientError),

    #[error("Failed to load orders")]
    OrdersUnavailable(#[source] ClientError),

    #[error("Failed to submit order")]
    SubmitFailed(#[source] ClientError),

    #[error("Failed to update order {0}")]
    UpdateFailed(i64, #[source] ClientError),

    #[error("Failed to delete order {0}")]
    DeleteFailed(i64, #[source] ClientError),

    #[error("No such order: {0}")]
    UnknownOrder(i64),
}

/// Client-side state for the order-management view
pub struct OrderBoard {
    api: Arc<dyn StoreApi>,
    user: UserInfo,
    products: Vec<Product>,
    /// Selected quantity per product id; keys always match the catalog
    quantities: HashMap<i64, u32>,
    orders: Vec<Order>,
    editor: OrderEditor,
    loading: bool,
    error: Option<StoreError>,
}

impl OrderBoard {
    /// Create a board for the given user
    pub fn new(api: Arc<dyn StoreApi>, user: UserInfo) -> Self {
        Self {
            api,
            user,
            products: Vec::new(),
            quantities: HashMap::new(),
            orders: Vec::new(),
            editor: OrderEditor::default(),
            loading: false,
            error: None,
        }
    }

    // ========== Accessors ==========

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Selected quantity for a product (0 for unknown ids)
    pub fn quantity(&self, product_id: i64) -> u32 {
        self.quantities.get(&product_id).copied().unwrap_or(0)
    }

    pub fn quantities(&self) -> &HashMap<i64, u32> {
        &self.quantities
    }

    /// Whether the catalog is currently loading
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The last failed operation, if the most recent one failed
    pub fn last_error(&self) -> Option<&StoreError> {
        self.error.as_ref()
    }

    /// The order under edit; `None` while the editor is closed
    pub fn editing(&self) -> Option<&Order> {
        self.editor.draft()
    }

    // ========== Loaders ==========

    /// Load the catalog and the order list (component-initialization hook)
    pub async fn refresh(&mut self) {
        self.load_catalog().await;
        self.load_orders().await;
    }

    /// Load the product catalog, reinitializing the quantity selection
    ///
    /// On failure the previous catalog and selection are left untouched.
    /// Safe to call repeatedly; each success fully replaces state.
    pub async fn load_catalog(&mut self) {
        self.loading = true;

        match self.api.fetch_products().await {
            Ok(products) => {
                self.quantities = products.iter().map(|p| (p.id, 0)).collect();
                self.products = products;
                self.error = None;
                tracing::debug!(count = self.products.len(), "catalog loaded");
            }
            Err(e) => {
                tracing::error!("Failed to load products: {}", e);
                self.error = Some(StoreError::CatalogUnavailable(e));
            }
        }

        self.loading = false;
    }

    /// Load the order list, replacing the local copy
    pub async fn load_orders(&mut self) {
        match self.api.fetch_orders().await {
            Ok(orders) => {
                self.orders = orders;
                self.error = None;
                tracing::debug!(count = self.orders.len(), "orders loaded");
            }
            Err(e) => {
                tracing::error!("Failed to load orders: {}", e);
                self.error = Some(StoreError::OrdersUnavailable(e));
            }
        }
    }

    // ========== Quantity selection ==========

    /// Adjust a product's selected quantity by `delta`, clamping at 0
    ///
    /// Ids not in the current catalog are ignored, so the selection's
    /// key set never drifts from the loaded products.
    pub fn adjust(&mut self, product_id: i64, delta: i32) {
        if let Some(quantity) = self.quantities.get_mut(&product_id) {
            *quantity = (i64::from(*quantity) + i64::from(delta)).max(0) as u32;
        }
    }

    // ========== Submission ==========

    /// Build the order draft from the current selection
    fn build_draft(&self, is_accepted: bool) -> OrderCreate {
        let lines: Vec<OrderLine> = self
            .products
            .iter()
            .filter_map(|product| {
                let quantity = self.quantity(product.id);
                (quantity > 0).then(|| OrderLine {
                    id: product.id,
                    name: product.name.clone(),
                    brand: product.brand.clone(),
                    price: product.price,
                    quantity,
                })
            })
            .collect();

        OrderCreate {
            client_id: self.user.id.clone(),
            total: line_total(&lines),
            products: lines,
            order_date: Utc::now(),
            is_accepted,
        }
    }

    /// Submit the current selection as a new order
    ///
    /// An empty selection still submits an empty, zero-total draft; there
    /// is no client-side minimum-selection validation. On success the
    /// order list is reloaded.
    pub async fn submit(&mut self, is_accepted: bool) {
        let draft = self.build_draft(is_accepted);
        tracing::info!(
            lines = draft.products.len(),
            total = draft.total,
            "submitting order"
        );

        match self.api.create_order(&draft).await {
            Ok(created) => {
                tracing::debug!(order_id = created.id, "order created");
                self.load_orders().await;
            }
            Err(e) => {
                tracing::error!("Failed to submit order: {}", e);
                self.error = Some(StoreError::SubmitFailed(e));
            }
        }
    }

    // ========== Editing ==========

    /// Open the editor on a clone of the listed order
    pub fn open_editor(&mut self, order_id: i64) {
        match self.orders.iter().find(|o| o.id == order_id) {
            Some(order) => self.editor = OrderEditor::open(order),
            None => self.error = Some(StoreError::UnknownOrder(order_id)),
        }
    }

    /// Set a line's quantity on the draft under edit
    pub fn set_line_quantity(&mut self, product_id: i64, quantity: u32) {
        self.editor.set_line_quantity(product_id, quantity);
    }

    /// Submit the draft under edit as a full-order update
    ///
    /// On success the editor closes and the order list is reloaded. On
    /// failure the editor stays open so the draft is not lost. A no-op
    /// while the editor is closed.
    pub async fn submit_edit(&mut self) {
        let Some(draft) = self.editor.draft().cloned() else {
            return;
        };

        match self.api.update_order(&draft).await {
            Ok(updated) => {
                tracing::debug!(order_id = updated.id, "order updated");
                self.editor.close();
                self.load_orders().await;
            }
            Err(e) => {
                tracing::error!("Failed to update order {}: {}", draft.id, e);
                self.error = Some(StoreError::UpdateFailed(draft.id, e));
            }
        }
    }

    /// Close the editor, discarding in-progress edits
    pub fn cancel_edit(&mut self) {
        self.editor.close();
    }

    // ========== Deletion ==========

    /// Delete an order; on success the order list is reloaded
    pub async fn delete_order(&mut self, order_id: i64) {
        match self.api.delete_order(order_id).await {
            Ok(()) => {
                tracing::debug!(order_id, "order deleted");
                self.load_orders().await;
            }
            Err(e) => {
                tracing::error!("Failed to delete order {}: {}", order_id, e);
                self.error = Some(StoreError::DeleteFailed(order_id, e));
            }
        }
    }
}
