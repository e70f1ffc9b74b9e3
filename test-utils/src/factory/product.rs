//! Product factory for creating test product entities.
//!
//! Products require an existing category; pass its id to the factory or use
//! `helpers::create_product_with_category` to create both.

use crate::factory::helpers::next_id;
use sea_orm::{prelude::Decimal, ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test products with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::product::ProductFactory;
///
/// let product = ProductFactory::new(&db, category.id)
///     .title("Cookie")
///     .description("Choc chip")
///     .price(Decimal::new(975, 2))
///     .build()
///     .await?;
/// ```
pub struct ProductFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    description: String,
    price: Decimal,
    category_id: i32,
}

impl<'a> ProductFactory<'a> {
    /// Creates a new ProductFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Product {id}"` where id is auto-incremented
    /// - description: `"Description for product {id}"`
    /// - price: `10.50`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `category_id` - ID of the category the product belongs to
    pub fn new(db: &'a DatabaseConnection, category_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Product {}", id),
            description: format!("Description for product {}", id),
            price: Decimal::new(1050, 2),
            category_id,
        }
    }

    /// Sets the product title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the product description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the product price.
    pub fn price(mut self, price: Decimal) -> Self {
        self.price = price;
        self
    }

    /// Builds and inserts the product entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::product::Model)` - Created product entity
    /// - `Err(DbErr)` - Database error during insert, including a missing category
    pub async fn build(self) -> Result<entity::product::Model, DbErr> {
        entity::product::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            price: ActiveValue::Set(self.price),
            category_id: ActiveValue::Set(self.category_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a product with default values in the given category.
///
/// Shorthand for `ProductFactory::new(db, category_id).build().await`.
pub async fn create_product(
    db: &DatabaseConnection,
    category_id: i32,
) -> Result<entity::product::Model, DbErr> {
    ProductFactory::new(db, category_id).build().await
}
