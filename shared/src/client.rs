//! Client-related types shared between server and client

use serde::{Deserialize, Serialize};

/// User information
///
/// Injected into the ordering client at construction; only order
/// submission consumes the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
}
