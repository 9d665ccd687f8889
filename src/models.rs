use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub price: Decimal,
    pub flavor: Option<String>,
    pub img: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub img: String,
    pub flavors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Order {
    pub order_id: String,
    pub order_date: DateTime<Utc>,
    pub total_amount: Decimal,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct OrderItem {
    pub item_id: i64,
    pub order_id: String,
    pub product_id: String,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: Decimal,
}

/// A validated cart line, priced from the catalog at checkout time. Becomes
/// an `order_items` row once the order commits.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub product_id: String,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: Decimal,
}
