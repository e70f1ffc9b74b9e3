use super::*;

/// Tests overwriting every field of a product.
///
/// Expected: Ok(Product) with the new values persisted
#[tokio::test]
async fn updates_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_storefront_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, product) = factory::helpers::create_product_with_category(db).await?;
    let other_category = factory::create_category(db).await?;

    let repo = ProductRepository::new(db);
    let updated = repo
        .update(
            product.id,
            ProductParams {
                title: "Brownie".to_string(),
                description: "Fudge".to_string(),
                price: Decimal::new(1225, 2),
                category_id: other_category.id,
            },
        )
        .await?;

    assert_eq!(updated.id, product.id);
    assert_eq!(updated.title, "Brownie");

    let stored = entity::prelude::Product::find_by_id(product.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.title, "Brownie");
    assert_eq!(stored.description, "Fudge");
    assert_eq!(stored.price, Decimal::new(1225, 2));
    assert_eq!(stored.category_id, other_category.id);

    Ok(())
}

/// Tests that applying the same update twice leaves the same stored state.
///
/// Expected: Ok with identical rows after each update
#[tokio::test]
async fn repeated_update_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_storefront_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (category, product) = factory::helpers::create_product_with_category(db).await?;

    let repo = ProductRepository::new(db);
    repo.update(product.id, params("Brownie", category.id)).await?;
    let once = entity::prelude::Product::find_by_id(product.id)
        .one(db)
        .await?;

    repo.update(product.id, params("Brownie", category.id)).await?;
    let twice = entity::prelude::Product::find_by_id(product.id)
        .one(db)
        .await?;

    assert_eq!(once, twice);

    Ok(())
}

/// Tests updating a product that doesn't exist.
///
/// No existence check happens first; the update itself reports that no row changed.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_for_nonexistent_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_storefront_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;

    let repo = ProductRepository::new(db);
    let result = repo.update(99999, params("Ghost", category.id)).await;

    assert!(result.is_err());

    Ok(())
}

/// Tests moving a product to a category that doesn't exist.
///
/// Expected: Err(DbErr) and the stored row unchanged
#[tokio::test]
async fn fails_for_nonexistent_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_storefront_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (category, product) = factory::helpers::create_product_with_category(db).await?;

    let repo = ProductRepository::new(db);
    let result = repo.update(product.id, params("Moved", 99999)).await;

    assert!(result.is_err());

    let stored = entity::prelude::Product::find_by_id(product.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.category_id, category.id);
    assert_eq!(stored.title, product.title);

    Ok(())
}
