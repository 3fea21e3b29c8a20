//! Order entity representing a purchase order.
//!
//! Orders reference a user and products by id, but no referential integrity
//! is enforced between collections: an order's `user_id` and its items'
//! `product_id` values are stored verbatim, and creating an order does not
//! touch product stock.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::resource::Resource;

/// Order lifecycle state, serialized lowercase on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Completed,
    Cancelled,
}

/// A single line item within an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: String,
    pub quantity: u32,
    pub price: f64,
}

/// A purchase order.
///
/// `created_at` is assigned server-side at creation time and never changed
/// by updates.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub user_id: String,
    pub items: Vec<OrderItem>,
    pub total: f64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a new order.
///
/// Only `user_id` is required; `items` defaults to empty, `total` to zero
/// and `status` to [`OrderStatus::Pending`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub user_id: String,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub status: OrderStatus,
}

/// Partial update for an existing order. `None` fields are left unchanged.
///
/// `created_at` is deliberately absent: it is server-owned and survives any
/// update payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPatch {
    pub user_id: Option<String>,
    pub items: Option<Vec<OrderItem>>,
    pub total: Option<f64>,
    pub status: Option<OrderStatus>,
}

impl Resource for Order {
    type Create = NewOrder;
    type Patch = OrderPatch;

    const NAME: &'static str = "Order";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_create(id: String, input: NewOrder) -> Self {
        Self {
            id,
            user_id: input.user_id,
            items: input.items,
            total: input.total,
            status: input.status,
            created_at: Utc::now(),
        }
    }

    fn apply_patch(&mut self, patch: OrderPatch) {
        if let Some(user_id) = patch.user_id {
            self.user_id = user_id;
        }
        if let Some(items) = patch.items {
            self.items = items;
        }
        if let Some(total) = patch.total {
            self.total = total;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}
