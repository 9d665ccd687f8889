use std::collections::{HashMap, HashSet};

use chrono::{SubsecRound, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    db::DbPool,
    dto::checkout::{CartItem, CheckoutRequest, CheckoutResponse},
    error::{AppError, AppResult},
    models::{LineItem, Order, Product},
    store,
};

/// Status stamped on every new order. Nothing in this service moves an order
/// past it.
pub const STATUS_PROCESSING: &str = "Processing";

const CONFIRMATION_MESSAGE: &str = "Order placed successfully!";

/// Validate a submitted cart against the catalog and persist the order with
/// its line items in one transaction.
///
/// Unit prices come from the catalog rows fetched here; nothing the client
/// sends besides product id and quantity is trusted. Either the whole cart
/// commits or nothing does.
pub async fn process_checkout(
    pool: &DbPool,
    request: CheckoutRequest,
) -> AppResult<CheckoutResponse> {
    if request.items.is_empty() {
        return Err(AppError::EmptyCart);
    }

    let product_ids = distinct_product_ids(&request.items);
    if product_ids.is_empty() {
        // Unreachable once the cart is non-empty; guards the id collection.
        return Err(AppError::NoValidItems);
    }

    let mut txn = pool.begin().await?;

    let products = store::products_by_ids(&mut txn, &product_ids).await?;
    let (total_amount, lines) = validate_cart(&request.items, &products)?;

    let order = Order {
        order_id: Uuid::new_v4().to_string(),
        order_date: Utc::now().trunc_subsecs(0),
        total_amount,
        status: STATUS_PROCESSING.to_string(),
    };

    store::insert_order_with_items(&mut txn, &order, &lines).await?;

    txn.commit().await?;

    tracing::info!(
        order_id = %order.order_id,
        total = %order.total_amount,
        items = lines.len(),
        "order placed"
    );

    Ok(CheckoutResponse {
        order_id: order.order_id,
        status: order.status,
        total: order.total_amount,
        message: CONFIRMATION_MESSAGE.to_string(),
    })
}

/// Product ids referenced by the cart, first-occurrence order, one entry per
/// id no matter how many cart lines repeat it.
fn distinct_product_ids(items: &[CartItem]) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .iter()
        .filter(|item| seen.insert(item.id.clone()))
        .map(|item| item.id.clone())
        .collect()
}

/// Check every cart line against the fetched catalog subset and price it.
///
/// The first unknown product id or non-positive quantity fails the whole
/// cart. Duplicate ids stay separate lines. Returns the total rounded to two
/// decimals plus one snapshot per cart line.
fn validate_cart(
    items: &[CartItem],
    products: &HashMap<String, Product>,
) -> AppResult<(Decimal, Vec<LineItem>)> {
    let mut total = Decimal::ZERO;
    let mut lines = Vec::with_capacity(items.len());

    for item in items {
        let product = products.get(&item.id).ok_or(AppError::InvalidItem)?;
        if item.qty <= 0 {
            return Err(AppError::InvalidItem);
        }

        total += product.price * Decimal::from(item.qty);
        lines.push(LineItem {
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            quantity: item.qty,
            unit_price: product.price,
        });
    }

    Ok((total.round_dp(2), lines))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn catalog() -> HashMap<String, Product> {
        [
            ("prod-001", "70% Dark Cacao Bar", dec!(8.00)),
            ("prod-002", "Sea Salt Dark Squares", dec!(12.00)),
        ]
        .into_iter()
        .map(|(id, name, price)| {
            (
                id.to_string(),
                Product {
                    id: id.to_string(),
                    name: name.to_string(),
                    price,
                    flavor: None,
                    img: None,
                },
            )
        })
        .collect()
    }

    fn line(id: &str, qty: i32) -> CartItem {
        CartItem {
            id: id.to_string(),
            qty,
        }
    }

    #[test]
    fn total_comes_from_catalog_prices() {
        let (total, lines) =
            validate_cart(&[line("prod-001", 2), line("prod-002", 1)], &catalog()).unwrap();

        assert_eq!(total, dec!(28.00));
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].unit_price, dec!(8.00));
        assert_eq!(lines[0].product_name, "70% Dark Cacao Bar");
        assert_eq!(lines[1].quantity, 1);
    }

    #[test]
    fn unknown_product_fails_the_whole_cart() {
        let err =
            validate_cart(&[line("prod-001", 1), line("prod-999", 1)], &catalog()).unwrap_err();

        assert!(matches!(err, AppError::InvalidItem));
    }

    #[test]
    fn zero_quantity_is_rejected() {
        let err = validate_cart(&[line("prod-001", 0)], &catalog()).unwrap_err();
        assert!(matches!(err, AppError::InvalidItem));
    }

    #[test]
    fn negative_quantity_is_rejected() {
        let err = validate_cart(&[line("prod-001", -3)], &catalog()).unwrap_err();
        assert!(matches!(err, AppError::InvalidItem));
    }

    #[test]
    fn duplicate_cart_lines_stay_separate() {
        let (total, lines) =
            validate_cart(&[line("prod-001", 1), line("prod-001", 3)], &catalog()).unwrap();

        assert_eq!(total, dec!(32.00));
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].quantity, 1);
        assert_eq!(lines[1].quantity, 3);
    }

    #[test]
    fn distinct_ids_keep_first_occurrence_order() {
        let ids = distinct_product_ids(&[
            line("prod-002", 1),
            line("prod-001", 1),
            line("prod-002", 4),
        ]);

        assert_eq!(ids, vec!["prod-002".to_string(), "prod-001".to_string()]);
    }
}
