use axum::{Json, Router, extract::State, routing::post};

use crate::{
    db::DbPool,
    dto::checkout::{CheckoutRequest, CheckoutResponse},
    error::{AppResult, ErrorBody},
    services::checkout_service,
};

pub fn router() -> Router<DbPool> {
    Router::new().route("/", post(checkout))
}

#[utoipa::path(
    post,
    path = "/api/checkout",
    request_body = CheckoutRequest,
    responses(
        (status = 200, description = "Order created", body = CheckoutResponse),
        (status = 400, description = "Empty cart, unknown product or bad quantity", body = ErrorBody),
        (status = 500, description = "Storage failure; nothing was persisted", body = ErrorBody),
    ),
    tag = "Checkout"
)]
pub async fn checkout(
    State(pool): State<DbPool>,
    Json(payload): Json<CheckoutRequest>,
) -> AppResult<Json<CheckoutResponse>> {
    let receipt = checkout_service::process_checkout(&pool, payload).await?;
    Ok(Json(receipt))
}
