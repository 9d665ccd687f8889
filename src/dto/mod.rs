pub mod checkout;
pub mod products;
