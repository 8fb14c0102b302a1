//! Provider Client - ordering client for the storefront backend
//!
//! Client-side CRUD synchronization: catalog and order loading, quantity
//! selection, order submission, editing, and deletion. The order list is
//! re-fetched in full after every successful mutation, so the local view
//! never diverges from the server.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod store;

pub use api::StoreApi;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::RestClient;
pub use store::{OrderBoard, OrderEditor, StoreError};

// Re-export shared types for convenience
pub use shared::client::UserInfo;
pub use shared::models::{Order, OrderCreate, OrderLine, Product};
