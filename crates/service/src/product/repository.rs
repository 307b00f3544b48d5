use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;
use super::{NewProduct, Product};

/// Store gateway for products.
///
/// Implementations must report a missing row on `delete` as `ServiceError::NotFound`
/// and a rejected duplicate title on `create` as `ServiceError::Conflict`.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_by_title(&self, title: &str) -> Result<Option<Product>, ServiceError>;
    async fn create(&self, input: NewProduct) -> Result<Product, ServiceError>;
    async fn delete(&self, id: &str) -> Result<Product, ServiceError>;
    async fn list(&self) -> Result<Vec<Product>, ServiceError>;
}

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmProductRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmProductRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn find_by_title(&self, title: &str) -> Result<Option<Product>, ServiceError> {
        Ok(models::product::find_by_title(&self.db, title).await?)
    }

    async fn create(&self, input: NewProduct) -> Result<Product, ServiceError> {
        Ok(models::product::create(&self.db, input).await?)
    }

    async fn delete(&self, id: &str) -> Result<Product, ServiceError> {
        Ok(models::product::delete(&self.db, id).await?)
    }

    async fn list(&self) -> Result<Vec<Product>, ServiceError> {
        Ok(models::product::list(&self.db).await?)
    }
}

/// In-memory repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Mutex, MutexGuard, PoisonError};
    use uuid::Uuid;

    #[derive(Default)]
    pub struct MockProductRepository {
        rows: Mutex<Vec<Product>>,
        failing: AtomicBool,
        stale_reads: AtomicBool,
    }

    impl MockProductRepository {
        /// Every call fails with `ServiceError::Db`, like a dropped connection.
        pub fn set_failing(&self, failing: bool) { self.failing.store(failing, Ordering::SeqCst); }

        /// `find_by_title` always misses, so only the uniqueness rule in `create` can catch duplicates.
        pub fn set_stale_reads(&self, stale: bool) { self.stale_reads.store(stale, Ordering::SeqCst); }

        pub fn len(&self) -> usize { self.rows().len() }

        pub fn is_empty(&self) -> bool { self.rows().is_empty() }

        fn rows(&self) -> MutexGuard<'_, Vec<Product>> {
            self.rows.lock().unwrap_or_else(PoisonError::into_inner)
        }

        fn check(&self) -> Result<(), ServiceError> {
            if self.failing.load(Ordering::SeqCst) {
                return Err(ServiceError::Db("simulated store failure".into()));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl ProductRepository for MockProductRepository {
        async fn find_by_title(&self, title: &str) -> Result<Option<Product>, ServiceError> {
            self.check()?;
            if self.stale_reads.load(Ordering::SeqCst) {
                return Ok(None);
            }
            Ok(self.rows().iter().find(|p| p.title == title).cloned())
        }

        async fn create(&self, input: NewProduct) -> Result<Product, ServiceError> {
            self.check()?;
            let mut rows = self.rows();
            if rows.iter().any(|p| p.title == input.title) {
                return Err(ServiceError::Conflict(format!("duplicate title {}", input.title)));
            }
            let product = Product {
                id: Uuid::new_v4().to_string(),
                title: input.title,
                img_url: input.img_url,
                price: input.price,
                description: input.description,
            };
            rows.push(product.clone());
            Ok(product)
        }

        async fn delete(&self, id: &str) -> Result<Product, ServiceError> {
            self.check()?;
            let mut rows = self.rows();
            let pos = rows
                .iter()
                .position(|p| p.id == id)
                .ok_or_else(|| ServiceError::not_found("product"))?;
            Ok(rows.remove(pos))
        }

        async fn list(&self) -> Result<Vec<Product>, ServiceError> {
            self.check()?;
            Ok(self.rows().clone())
        }
    }
}
