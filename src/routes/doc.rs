use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        checkout::{CartItem, CheckoutRequest, CheckoutResponse},
        products::CatalogResponse,
    },
    error::ErrorBody,
    models::{Category, Product},
    routes::{checkout, health, products},
};

#[derive(OpenApi)]
#[openapi(
    paths(health::health_check, products::list_products, checkout::checkout),
    components(schemas(
        Product,
        Category,
        CatalogResponse,
        CartItem,
        CheckoutRequest,
        CheckoutResponse,
        ErrorBody,
    )),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Catalog", description = "Product catalog endpoints"),
        (name = "Checkout", description = "Cart checkout endpoint"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
