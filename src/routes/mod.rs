use axum::Router;

use crate::db::DbPool;

pub mod checkout;
pub mod doc;
pub mod health;
pub mod products;

// Build the API router without binding state; it is provided at the top level.
pub fn create_api_router() -> Router<DbPool> {
    Router::new()
        .nest("/products", products::router())
        .nest("/checkout", checkout::router())
}
