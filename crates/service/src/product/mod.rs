//! Product catalog: validation, persistence gateway and business rules.

pub mod domain;
pub mod repository;
pub mod service;

pub use models::product::{Model as Product, NewProduct};
pub use service::ProductService;
