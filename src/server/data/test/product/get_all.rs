use super::*;

/// Tests listing products with their categories.
///
/// Verifies that each product carries its joined category and that results are
/// ordered by id.
///
/// Expected: Ok(Vec<Product>) with categories resolved
#[tokio::test]
async fn lists_products_with_categories() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_storefront_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let cookies = factory::category::CategoryFactory::new(db)
        .title("Cookies")
        .build()
        .await?;
    let cakes = factory::category::CategoryFactory::new(db)
        .title("Cakes")
        .build()
        .await?;
    let first = factory::create_product(db, cookies.id).await?;
    let second = factory::create_product(db, cakes.id).await?;

    let repo = ProductRepository::new(db);
    let products = repo.get_all().await?;

    assert_eq!(products.len(), 2);
    assert_eq!(products[0].id, first.id);
    assert_eq!(products[1].id, second.id);
    assert_eq!(products[0].category.as_ref().unwrap().title, "Cookies");
    assert_eq!(products[1].category.as_ref().unwrap().title, "Cakes");

    Ok(())
}

/// Tests listing when no products exist.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_list_without_products() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_storefront_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProductRepository::new(db);
    let products = repo.get_all().await?;

    assert!(products.is_empty());

    Ok(())
}
