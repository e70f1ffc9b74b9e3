use super::*;

/// Tests deleting an existing product.
///
/// Expected: Ok(Product) with the removed product's title; absent from later lists
#[tokio::test]
async fn deletes_existing_product() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_storefront_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, product) = factory::helpers::create_product_with_category(db).await?;

    let service = ProductService::new(db);
    let removed = service.delete(product.id).await?;

    assert_eq!(removed.title, product.title);
    assert!(service.get_all().await?.iter().all(|p| p.id != product.id));

    Ok(())
}

/// Tests deleting a product that doesn't exist.
///
/// Expected: Err(AppError::NotFound("Product not found"))
#[tokio::test]
async fn fails_with_not_found_for_missing_product() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_storefront_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, existing) = factory::helpers::create_product_with_category(db).await?;

    let service = ProductService::new(db);
    let result = service.delete(99999).await;

    match result {
        Err(AppError::NotFound(msg)) => assert_eq!(msg, "Product not found"),
        other => panic!("Expected NotFound, got: {:?}", other),
    }

    assert_eq!(service.get_all().await?.len(), 1);
    assert_eq!(service.get_by_id(existing.id).await?.id, existing.id);

    Ok(())
}
