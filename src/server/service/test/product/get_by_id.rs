use super::*;

/// Tests fetching an existing product through the service.
///
/// Expected: Ok(Product) with category joined
#[tokio::test]
async fn returns_existing_product() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_storefront_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (category, product) = factory::helpers::create_product_with_category(db).await?;

    let service = ProductService::new(db);
    let found = service.get_by_id(product.id).await?;

    assert_eq!(found.id, product.id);
    assert_eq!(found.category.map(|c| c.id), Some(category.id));

    Ok(())
}

/// Tests fetching a product that doesn't exist.
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

    let service = ProductService::new(db);
    let result = service.get_by_id(99999).await;

    match result {
        Err(AppError::NotFound(msg)) => assert_eq!(msg, "Product not found"),
        other => panic!("Expected NotFound, got: {:?}", other),
    }

    Ok(())
}
