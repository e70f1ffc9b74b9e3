use super::*;

/// Tests replacing a product with a matching id.
///
/// Expected: Ok(Product) echoing the new values
#[tokio::test]
async fn replaces_product_with_matching_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_storefront_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (category, product) = factory::helpers::create_product_with_category(db).await?;

    let service = ProductService::new(db);
    let replaced = service
        .replace(product.id, payload(Some(product.id), "Brownie", category.id))
        .await?;

    assert_eq!(replaced.id, product.id);
    assert_eq!(replaced.title, "Brownie");
    assert_eq!(service.get_by_id(product.id).await?.title, "Brownie");

    Ok(())
}

/// Tests that a mismatched payload id is rejected and the record left alone.
///
/// Expected: Err(AppError::NotFound) naming the payload title; stored row unchanged
#[tokio::test]
async fn rejects_mismatched_id_without_touching_record() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_storefront_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (category, product) = factory::helpers::create_product_with_category(db).await?;

    let service = ProductService::new(db);
    let result = service
        .replace(product.id, payload(Some(product.id + 1), "Brownie", category.id))
        .await;

    match result {
        Err(AppError::NotFound(msg)) => assert_eq!(msg, "Product 'Brownie' not found"),
        other => panic!("Expected NotFound, got: {:?}", other),
    }

    let stored = entity::prelude::Product::find_by_id(product.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored, product);

    Ok(())
}

/// Tests that a missing payload id counts as 0 and never matches a stored product.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn treats_missing_payload_id_as_mismatch() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_storefront_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (category, product) = factory::helpers::create_product_with_category(db).await?;

    let service = ProductService::new(db);
    let result = service
        .replace(product.id, payload(None, "Brownie", category.id))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that the id check runs before validation.
///
/// Expected: Err(AppError::NotFound) even though the payload is also invalid
#[tokio::test]
async fn checks_id_before_validating() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_storefront_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ProductService::new(db);
    let result = service.replace(1, ProductPayloadDto::default()).await;

    match result {
        Err(AppError::NotFound(msg)) => assert_eq!(msg, "Product '' not found"),
        other => panic!("Expected NotFound, got: {:?}", other),
    }

    Ok(())
}

/// Tests replacing a product that doesn't exist with matching ids.
///
/// Expected: Err(AppError::BadRequest("Unable to update product"))
#[tokio::test]
async fn fails_with_bad_request_for_missing_row() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_storefront_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;

    let service = ProductService::new(db);
    let result = service
        .replace(99999, payload(Some(99999), "Ghost", category.id))
        .await;

    match result {
        Err(AppError::BadRequest(msg)) => assert_eq!(msg, "Unable to update product"),
        other => panic!("Expected BadRequest, got: {:?}", other),
    }

    Ok(())
}

/// Tests replacing with matching ids but an invalid payload.
///
/// Expected: Err(AppError::Validation) listing each bad field; stored row unchanged
#[tokio::test]
async fn rejects_invalid_payload_without_touching_record() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_storefront_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, product) = factory::helpers::create_product_with_category(db).await?;

    let service = ProductService::new(db);
    let result = service
        .replace(
            product.id,
            ProductPayloadDto {
                id: Some(product.id),
                title: Some("ab".to_string()),
                description: None,
                price: Some(Decimal::ZERO),
                category_id: Some(0),
            },
        )
        .await;

    match result {
        Err(AppError::Validation(errors)) => {
            assert!(errors.contains("title"));
            assert!(errors.contains("description"));
            assert!(errors.contains("price"));
            assert!(errors.contains("categoryId"));
        }
        other => panic!("Expected Validation, got: {:?}", other),
    }

    let stored = entity::prelude::Product::find_by_id(product.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored, product);

    Ok(())
}
