use super::*;

/// Tests deleting a product by id.
///
/// Expected: Ok(1) and the product no longer listed
#[tokio::test]
async fn deletes_product_successfully() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_storefront_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, product) = factory::helpers::create_product_with_category(db).await?;

    let repo = ProductRepository::new(db);
    let removed = repo.delete(product.id).await?;

    assert_eq!(removed, 1);

    let remaining = repo.get_all().await?;
    assert!(remaining.iter().all(|p| p.id != product.id));

    Ok(())
}

/// Tests deleting a nonexistent product.
///
/// Expected: Ok(0)
#[tokio::test]
async fn deletes_nonexistent_product_reports_zero_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_storefront_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProductRepository::new(db);

    assert_eq!(repo.delete(99999).await?, 0);

    Ok(())
}

/// Tests deleting one product doesn't affect others or the category.
///
/// Expected: Ok with only the target product removed
#[tokio::test]
async fn deletes_product_without_affecting_others() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_storefront_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let first = factory::create_product(db, category.id).await?;
    let second = factory::create_product(db, category.id).await?;

    let repo = ProductRepository::new(db);
    repo.delete(first.id).await?;

    assert!(repo.find_by_id(first.id).await?.is_none());
    assert!(repo.find_by_id(second.id).await?.is_some());

    let category_still_there = entity::prelude::Category::find_by_id(category.id)
        .one(db)
        .await?;
    assert!(category_still_there.is_some());

    Ok(())
}
