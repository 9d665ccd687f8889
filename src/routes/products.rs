use axum::{Json, Router, extract::State, routing::get};

use crate::{
    db::DbPool,
    dto::products::CatalogResponse,
    error::{AppResult, ErrorBody},
    services::catalog_service,
};

pub fn router() -> Router<DbPool> {
    Router::new().route("/", get(list_products))
}

#[utoipa::path(
    get,
    path = "/api/products",
    responses(
        (status = 200, description = "Full catalog with display categories", body = CatalogResponse),
        (status = 500, description = "Storage failure", body = ErrorBody),
    ),
    tag = "Catalog"
)]
pub async fn list_products(State(pool): State<DbPool>) -> AppResult<Json<CatalogResponse>> {
    let catalog = catalog_service::list_catalog(&pool).await?;
    Ok(Json(catalog))
}
