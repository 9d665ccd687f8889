use std::collections::HashMap;

use sqlx::PgConnection;

use crate::{
    db::DbPool,
    error::AppResult,
    models::{LineItem, Order, Product},
};

/// Insert a product, or overwrite its display fields when the id already
/// exists. Only the seeding path writes the catalog.
pub async fn upsert_product(pool: &DbPool, product: &Product) -> AppResult<()> {
    sqlx::query(
        r#"
        INSERT INTO products (id, name, price, flavor, img)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (id) DO UPDATE
        SET name = EXCLUDED.name,
            price = EXCLUDED.price,
            flavor = EXCLUDED.flavor,
            img = EXCLUDED.img
        "#,
    )
    .bind(&product.id)
    .bind(&product.name)
    .bind(product.price)
    .bind(&product.flavor)
    .bind(&product.img)
    .execute(pool)
    .await?;

    Ok(())
}

/// The whole catalog in id order; the storefront renders it in one page.
pub async fn list_products(pool: &DbPool) -> AppResult<Vec<Product>> {
    let products =
        sqlx::query_as::<_, Product>("SELECT id, name, price, flavor, img FROM products ORDER BY id")
            .fetch_all(pool)
            .await?;

    Ok(products)
}

/// Fetch the products whose ids appear in `ids`, keyed by id, in one query.
/// Ids without a matching row are simply absent from the map; an empty `ids`
/// yields an empty map without touching the database.
pub async fn products_by_ids(
    conn: &mut PgConnection,
    ids: &[String],
) -> AppResult<HashMap<String, Product>> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = sqlx::query_as::<_, Product>(
        "SELECT id, name, price, flavor, img FROM products WHERE id = ANY($1)",
    )
    .bind(ids)
    .fetch_all(&mut *conn)
    .await?;

    Ok(rows.into_iter().map(|p| (p.id.clone(), p)).collect())
}

/// Insert an order and all of its line items on the caller's connection.
/// Callers run this inside a transaction so a failed insert leaves nothing
/// behind.
pub async fn insert_order_with_items(
    conn: &mut PgConnection,
    order: &Order,
    items: &[LineItem],
) -> AppResult<()> {
    sqlx::query(
        "INSERT INTO orders (order_id, order_date, total_amount, status) VALUES ($1, $2, $3, $4)",
    )
    .bind(&order.order_id)
    .bind(order.order_date)
    .bind(order.total_amount)
    .bind(&order.status)
    .execute(&mut *conn)
    .await?;

    for item in items {
        sqlx::query(
            r#"
            INSERT INTO order_items (order_id, product_id, product_name, quantity, unit_price)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(&order.order_id)
        .bind(&item.product_id)
        .bind(&item.product_name)
        .bind(item.quantity)
        .bind(item.unit_price)
        .execute(&mut *conn)
        .await?;
    }

    Ok(())
}
