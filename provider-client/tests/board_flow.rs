// provider-client/tests/board_flow.rs
// End-to-end board flow over an in-memory backend

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use provider_client::{
    ClientResult, Order, OrderBoard, OrderCreate, Product, StoreApi, UserInfo,
};

/// In-process backend: the same trait the network client implements,
/// served from memory.
struct InMemoryStore {
    products: Vec<Product>,
    orders: Mutex<Vec<Order>>,
    next_id: AtomicI64,
}

impl InMemoryStore {
    fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            orders: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl StoreApi for InMemoryStore {
    async fn fetch_products(&self) -> ClientResult<Vec<Product>> {
        Ok(self.products.clone())
    }

    async fn fetch_orders(&self) -> ClientResult<Vec<Order>> {
        Ok(self.orders.lock().unwrap().clone())
    }

    async fn create_order(&self, draft: &OrderCreate) -> ClientResult<Order> {
        let order = Order {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            client_id: draft.client_id.clone(),
            products: draft.products.clone(),
            total: draft.total,
            order_date: draft.order_date,
            is_accepted: draft.is_accepted,
        };
        self.orders.lock().unwrap().push(order.clone());
        Ok(order)
    }

    async fn update_order(&self, order: &Order) -> ClientResult<Order> {
        let mut orders = self.orders.lock().unwrap();
        let stored = orders
            .iter_mut()
            .find(|o| o.id == order.id)
            .expect("updating an order that was never created");
        *stored = order.clone();
        Ok(order.clone())
    }

    async fn delete_order(&self, order_id: i64) -> ClientResult<()> {
        self.orders.lock().unwrap().retain(|o| o.id != order_id);
        Ok(())
    }
}

fn product(id: i64, name: &str, brand: &str, price: f64) -> Product {
    Product {
        id,
        name: name.to_string(),
        brand: brand.to_string(),
        price,
    }
}

#[tokio::test]
async fn test_full_order_lifecycle() {
    let store = Arc::new(InMemoryStore::new(vec![
        product(1, "Flour", "Acme", 10.0),
        product(2, "Sugar", "Dulce", 5.0),
        product(3, "Salt", "Mar", 2.5),
    ]));

    let user = UserInfo {
        id: "client-7".to_string(),
        username: "panaderia".to_string(),
    };
    let mut board = OrderBoard::new(Arc::clone(&store) as Arc<dyn StoreApi>, user);

    // mount: catalog + orders
    board.refresh().await;
    assert_eq!(board.products().len(), 3);
    assert!(board.orders().is_empty());
    assert!(board.last_error().is_none());

    // select and create
    board.adjust(1, 2);
    board.adjust(2, 1);
    board.submit(false).await;

    assert_eq!(board.orders().len(), 1);
    let order = &board.orders()[0];
    assert_eq!(order.client_id, "client-7");
    assert_eq!(order.total, 25.0);
    assert_eq!(order.products.len(), 2);

    // a second order from the untouched selection
    board.submit(true).await;
    assert_eq!(board.orders().len(), 2);
    assert!(board.orders()[1].is_accepted);

    // edit the first order
    let first_id = board.orders()[0].id;
    board.open_editor(first_id);
    board.set_line_quantity(2, 4);
    board.submit_edit().await;

    assert!(board.editing().is_none());
    assert_eq!(board.orders()[0].total, 40.0);
    assert_eq!(board.orders()[0].products[1].quantity, 4);

    // delete the second order
    let second_id = board.orders()[1].id;
    board.delete_order(second_id).await;

    assert_eq!(board.orders().len(), 1);
    assert_eq!(board.orders()[0].id, first_id);
    assert!(board.last_error().is_none());
}

#[tokio::test]
async fn test_reload_on_mutation_reflects_server_state() {
    let store = Arc::new(InMemoryStore::new(vec![product(1, "Flour", "Acme", 10.0)]));

    let user = UserInfo {
        id: "client-1".to_string(),
        username: "tester".to_string(),
    };
    let mut board = OrderBoard::new(Arc::clone(&store) as Arc<dyn StoreApi>, user);
    board.refresh().await;

    board.adjust(1, 1);
    board.submit(false).await;

    // another client's order lands server-side; our next mutation's
    // reload picks it up wholesale
    store.orders.lock().unwrap().push(Order {
        id: 99,
        client_id: "someone-else".to_string(),
        products: vec![],
        total: 0.0,
        order_date: chrono::Utc::now(),
        is_accepted: false,
    });

    let own_id = board.orders()[0].id;
    board.delete_order(own_id).await;

    assert_eq!(board.orders().len(), 1);
    assert_eq!(board.orders()[0].id, 99);
}
