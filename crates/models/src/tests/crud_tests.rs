use anyhow::Result;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};

use crate::errors::ModelError;
use crate::product::{self, NewProduct};
use super::setup_test_db;

fn widget(title: &str) -> NewProduct {
    NewProduct {
        title: title.to_string(),
        img_url: "http://x/1.png".to_string(),
        price: 9.99,
        description: "A widget".to_string(),
    }
}

/// Test product create / read / list / delete
#[tokio::test]
async fn test_product_crud() -> Result<()> {
    let db = setup_test_db().await?;

    let created = product::create(&db, widget("Widget")).await?;
    assert!(!created.id.is_empty());
    assert_eq!(created.title, "Widget");
    assert_eq!(created.img_url, "http://x/1.png");
    assert_eq!(created.price, 9.99);
    assert_eq!(created.description, "A widget");

    let found = product::Entity::find_by_id(created.id.clone()).one(&db).await?;
    assert_eq!(found.as_ref(), Some(&created));

    let by_title = product::find_by_title(&db, "Widget").await?;
    assert_eq!(by_title.map(|p| p.id), Some(created.id.clone()));
    assert!(product::find_by_title(&db, "widget").await?.is_none());

    let all = product::list(&db).await?;
    assert_eq!(all, vec![created.clone()]);

    let deleted = product::delete(&db, &created.id).await?;
    assert_eq!(deleted, created);
    assert_eq!(product::count(&db).await?, 0);
    Ok(())
}

#[tokio::test]
async fn test_generated_ids_are_distinct() -> Result<()> {
    let db = setup_test_db().await?;
    let a = product::create(&db, widget("A")).await?;
    let b = product::create(&db, widget("B")).await?;
    assert_ne!(a.id, b.id);
    assert_eq!(product::count(&db).await?, 2);
    Ok(())
}

#[tokio::test]
async fn test_unique_title_enforced_by_store() -> Result<()> {
    let db = setup_test_db().await?;
    product::create(&db, widget("Widget")).await?;

    // Bypass any application-level lookup: the table itself must refuse.
    let dup = product::ActiveModel {
        id: Set("manual-id".to_string()),
        title: Set("Widget".to_string()),
        img_url: Set(String::new()),
        price: Set(1.0),
        description: Set(String::new()),
    };
    let err = ModelError::from(dup.insert(&db).await.unwrap_err());
    assert!(matches!(err, ModelError::Conflict(_)), "got {err:?}");

    let err = product::create(&db, widget("Widget")).await.unwrap_err();
    assert!(matches!(err, ModelError::Conflict(_)), "got {err:?}");
    assert_eq!(product::count(&db).await?, 1);
    Ok(())
}

#[tokio::test]
async fn test_empty_strings_allowed_except_title() -> Result<()> {
    let db = setup_test_db().await?;
    let mut input = widget("Bare");
    input.img_url.clear();
    input.description.clear();
    let created = product::create(&db, input).await?;
    assert_eq!(created.img_url, "");
    assert_eq!(created.description, "");

    let err = product::create(&db, widget("")).await.unwrap_err();
    assert!(matches!(err, ModelError::Validation { field: "title", .. }));
    assert_eq!(product::count(&db).await?, 1);
    Ok(())
}

#[tokio::test]
async fn test_delete_missing_is_not_found() -> Result<()> {
    let db = setup_test_db().await?;
    let kept = product::create(&db, widget("Keep")).await?;

    let err = product::delete(&db, "does-not-exist").await.unwrap_err();
    assert!(matches!(err, ModelError::NotFound(_)));

    let deleted = product::delete(&db, &kept.id).await?;
    assert_eq!(deleted.id, kept.id);
    let again = product::delete(&db, &kept.id).await.unwrap_err();
    assert!(matches!(again, ModelError::NotFound(_)));
    Ok(())
}
