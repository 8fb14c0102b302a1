//! Shared types for the Provider storefront
//!
//! Common types used across the ordering client and any in-process
//! backend: product and order models plus user identity.

pub mod client;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};
