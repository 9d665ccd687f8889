use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CheckoutRequest {
    /// Cart lines in the order the client submitted them. A missing `items`
    /// key reads as an empty cart.
    #[serde(default)]
    pub items: Vec<CartItem>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CartItem {
    pub id: String,
    /// Defaults to 0 when omitted, which validation then rejects.
    #[serde(default)]
    pub qty: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub order_id: String,
    pub status: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub total: Decimal,
    pub message: String,
}
