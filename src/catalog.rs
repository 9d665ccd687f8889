use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{Category, Product};

/// The fixed catalog seeded at startup. Upserted by id, so edits here land on
/// the next boot without duplicating rows.
pub fn seed_products() -> Vec<Product> {
    vec![
        product(
            "prod-001",
            "70% Dark Cacao Bar",
            dec!(8.00),
            "Intense, deep, pure",
            "https://images.pexels.com/photos/6167328/pexels-photo-6167328.jpeg",
        ),
        product(
            "prod-002",
            "Sea Salt Dark Squares",
            dec!(12.00),
            "Dark chocolate, sea salt flakes",
            "https://images.unsplash.com/photo-1504674900247-0877df9cc836",
        ),
        product(
            "prod-003",
            "Espresso Milk Bar",
            dec!(10.00),
            "Smooth milk chocolate, espresso",
            "https://images.unsplash.com/photo-1504674900247-0877df9cc836",
        ),
        product(
            "prod-004",
            "White Raspberry Truffle",
            dec!(14.00),
            "White chocolate, raspberry",
            "https://images.unsplash.com/photo-1527515637462-cff94eecc1ac",
        ),
        product(
            "prod-005",
            "Champagne Truffle",
            dec!(17.00),
            "Milk chocolate, champagne",
            "https://images.pexels.com/photos/4399753/pexels-photo-4399753.jpeg",
        ),
        product(
            "prod-006",
            "Salted Caramel Praline",
            dec!(16.00),
            "Milk chocolate, salted caramel",
            "https://images.pexels.com/photos/7676087/pexels-photo-7676087.jpeg",
        ),
    ]
}

/// Display categories for the storefront. Purely presentational grouping;
/// never persisted and not linked to product rows.
pub fn display_categories() -> Vec<Category> {
    vec![
        Category {
            id: 1,
            name: "Dark Chocolate".to_string(),
            img: "https://images.pexels.com/photos/65882/chocolate-dark-coffee-confiserie-65882.jpeg".to_string(),
            flavors: flavors(&["70%Cacao", "Espresso", "Sea Salt", "Orange Zest"]),
        },
        Category {
            id: 2,
            name: "Milk Chocolate".to_string(),
            img: "https://images.unsplash.com/photo-1504674900247-0877df9cc836".to_string(),
            flavors: flavors(&["Classic", "Hazelnut", "Caramel", "Almond"]),
        },
        Category {
            id: 3,
            name: "Truffles & Pralines".to_string(),
            img: "https://images.pexels.com/photos/19121798/pexels-photo-19121798.jpeg".to_string(),
            flavors: flavors(&["Champagne", "Salted Caramel", "Tiramisu", "Rum"]),
        },
    ]
}

fn product(id: &str, name: &str, price: Decimal, flavor: &str, img: &str) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        price,
        flavor: Some(flavor.to_string()),
        img: Some(img.to_string()),
    }
}

fn flavors(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}
