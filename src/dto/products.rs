use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Category, Product};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CatalogResponse {
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
}
