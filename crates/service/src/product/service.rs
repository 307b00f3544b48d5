use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info, instrument};

use crate::errors::ServiceError;
use super::domain::{parse_product_id, CreateProductPayload};
use super::repository::ProductRepository;
use super::{NewProduct, Product};

pub const TITLE_EXISTS: &str = "Title already exists";
pub const PRODUCT_NOT_FOUND: &str = "Product not found";

/// Product business rules, independent of the web framework.
/// The store handle arrives through the repository; nothing here is global.
#[derive(Clone)]
pub struct ProductService {
    repo: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self { Self { repo } }

    /// Validate a raw JSON body, then create.
    pub async fn create_from_json(&self, body: &Value) -> Result<Product, ServiceError> {
        let input = CreateProductPayload::parse(body)?;
        self.create(input).await
    }

    /// Create a product with a title no other product has.
    ///
    /// # Examples
    /// ```
    /// use service::product::{NewProduct, ProductService, repository::mock::MockProductRepository};
    /// use std::sync::Arc;
    /// let svc = ProductService::new(Arc::new(MockProductRepository::default()));
    /// let input = NewProduct { title: "Widget".into(), img_url: "http://x/1.png".into(), price: 9.99, description: "A widget".into() };
    /// let created = tokio_test::block_on(svc.create(input.clone())).unwrap();
    /// assert_eq!(created.title, "Widget");
    /// assert!(tokio_test::block_on(svc.create(input)).is_err());
    /// ```
    #[instrument(skip(self, input), fields(title = %input.title))]
    pub async fn create(&self, input: NewProduct) -> Result<Product, ServiceError> {
        if let Some(existing) = self.repo.find_by_title(&input.title).await? {
            debug!(id = %existing.id, "title already taken");
            return Err(ServiceError::Conflict(TITLE_EXISTS.into()));
        }
        // a concurrent create can still win between the lookup and the insert
        let created = self.repo.create(input).await.map_err(|e| match e {
            ServiceError::Conflict(_) => ServiceError::Conflict(TITLE_EXISTS.into()),
            other => other,
        })?;
        info!(id = %created.id, title = %created.title, "product_created");
        Ok(created)
    }

    pub async fn list(&self) -> Result<Vec<Product>, ServiceError> {
        let rows = self.repo.list().await?;
        debug!(count = rows.len(), "products listed");
        Ok(rows)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<Product, ServiceError> {
        let id = parse_product_id(id)?;
        let deleted = self.repo.delete(id).await.map_err(|e| match e {
            ServiceError::NotFound(_) => ServiceError::NotFound(PRODUCT_NOT_FOUND.into()),
            other => other,
        })?;
        info!(id = %deleted.id, "product_deleted");
        Ok(deleted)
    }
}
