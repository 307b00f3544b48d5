//! Service layer for the product catalog.
//! - `product::repository` is the store gateway: a trait plus SeaORM and in-memory implementations.
//! - `product::domain` turns raw request payloads into validated inputs.
//! - `product::service` applies the business rules on top of a repository.

pub mod errors;
pub mod product;
#[cfg(test)]
pub mod test_support;
