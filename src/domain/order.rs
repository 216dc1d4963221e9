use serde::{Deserialize, Serialize};

/// A placed order. Read-only from this layer except for `status`, which is
/// changed through the dedicated status-update operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,
    pub status: String,
    pub delivery_details: DeliveryDetails,
    #[serde(default)]
    pub cart_items: Vec<CartItem>,
    pub total_amount: f64,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryDetails {
    pub name: String,
    pub email: String,
    pub address_line1: String,
    pub city: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub menu_item_id: String,
    pub name: String,
    pub quantity: u32,
}

/// Pairs an order identifier with its target status for one request.
#[derive(Debug, Clone)]
pub struct UpdateOrderStatusRequest {
    pub order_id: String,
    pub status: String,
}
