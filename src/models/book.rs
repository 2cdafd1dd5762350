//! Book record model and related types

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A catalog record together with its available quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    /// Caller-supplied identifier, treated as opaque. Uniqueness is by
    /// convention only; lookups take the first match in insertion order.
    pub id: String,
    pub title: String,
    pub author: String,
    /// Copies currently on the shelf. Checkout refuses to go below zero;
    /// return has no ceiling.
    pub quantity: i64,
}

/// Query parameters for the checkout/return routes
#[derive(Debug, Deserialize, IntoParams)]
pub struct BookIdQuery {
    /// Book identifier
    pub id: Option<String>,
}
