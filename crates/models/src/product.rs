use sea_orm::{entity::prelude::*, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, Set, TransactionTrait};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub title: String,
    pub img_url: String,
    pub price: f64,
    #[sea_orm(column_type = "Text")]
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Field values for a product that does not exist yet.
#[derive(Clone, Debug, PartialEq)]
pub struct NewProduct {
    pub title: String,
    pub img_url: String,
    pub price: f64,
    pub description: String,
}

pub fn validate_title(title: &str) -> Result<(), ModelError> {
    if title.is_empty() {
        return Err(ModelError::Validation { field: "title", message: "Title must not be empty".into() });
    }
    Ok(())
}

pub async fn find_by_title(db: &DatabaseConnection, title: &str) -> Result<Option<Model>, ModelError> {
    let found = Entity::find()
        .filter(Column::Title.eq(title))
        .one(db)
        .await?;
    Ok(found)
}

/// Insert with a freshly generated id. A duplicate title surfaces as `ModelError::Conflict`.
pub async fn create(db: &DatabaseConnection, new: NewProduct) -> Result<Model, ModelError> {
    validate_title(&new.title)?;
    let am = ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        title: Set(new.title),
        img_url: Set(new.img_url),
        price: Set(new.price),
        description: Set(new.description),
    };
    Ok(am.insert(db).await?)
}

pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find().all(db).await?)
}

pub async fn count(db: &DatabaseConnection) -> Result<u64, ModelError> {
    Ok(Entity::find().count(db).await?)
}

/// Delete by id and return the removed row; `ModelError::NotFound` when absent.
pub async fn delete(db: &DatabaseConnection, id: &str) -> Result<Model, ModelError> {
    let txn = db.begin().await?;
    let found = Entity::find_by_id(id.to_string())
        .one(&txn)
        .await?
        .ok_or_else(|| ModelError::NotFound(format!("product {id}")))?;
    let res = Entity::delete_by_id(found.id.clone()).exec(&txn).await?;
    if res.rows_affected == 0 {
        return Err(ModelError::NotFound(format!("product {id}")));
    }
    txn.commit().await?;
    Ok(found)
}
