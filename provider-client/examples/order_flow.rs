// provider-client/examples/order_flow.rs
// Drive the order board against a running storefront backend

use std::sync::Arc;

use provider_client::{ClientConfig, OrderBoard, StoreApi, UserInfo};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let base_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://localhost:5000".to_string());
    let client_id = std::env::var("PROVIDER_CLIENT_ID").unwrap_or_else(|_| "demo".to_string());

    let config = ClientConfig::new(&base_url).with_timeout(10);
    let api: Arc<dyn StoreApi> = Arc::new(config.build_rest_client()?);

    let user = UserInfo {
        id: client_id.clone(),
        username: client_id,
    };
    let mut board = OrderBoard::new(api, user);

    board.refresh().await;
    if let Some(err) = board.last_error() {
        tracing::error!("Initial load failed: {}", err);
        return Ok(());
    }

    for product in board.products() {
        tracing::info!(
            id = product.id,
            name = %product.name,
            brand = %product.brand,
            price = product.price,
            "product"
        );
    }

    // order one unit of the first catalog entry
    if let Some(first) = board.products().first().map(|p| p.id) {
        board.adjust(first, 1);
        board.submit(false).await;
    }

    for order in board.orders() {
        tracing::info!(
            id = order.id,
            total = order.total,
            accepted = order.is_accepted,
            lines = order.products.len(),
            "order"
        );
    }

    Ok(())
}
