use crate::{catalog, db::DbPool, dto::products::CatalogResponse, error::AppResult, store};

/// The full product list plus the static display categories, exactly as the
/// storefront renders them.
pub async fn list_catalog(pool: &DbPool) -> AppResult<CatalogResponse> {
    let products = store::list_products(pool).await?;

    Ok(CatalogResponse {
        categories: catalog::display_categories(),
        products,
    })
}
