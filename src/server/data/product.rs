//! Product data repository for database operations.
//!
//! This module provides the `ProductRepository`, the persistence gateway for the product
//! table. Read queries join the category table and return domain `Product` values;
//! entity models never leave this module.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::product::{Product, ProductParams};

/// Repository providing database operations for products.
pub struct ProductRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductRepository<'a> {
    /// Creates a new ProductRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all products with their category, ordered by id.
    pub async fn get_all(&self) -> Result<Vec<Product>, DbErr> {
        let rows = entity::prelude::Product::find()
            .find_also_related(entity::prelude::Category)
            .order_by_asc(entity::product::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(product, category)| Product::from_entity_with_category(product, category))
            .collect())
    }

    /// Gets a single product with its category.
    ///
    /// # Returns
    /// - `Ok(Some(Product))` - Product found
    /// - `Ok(None)` - No product with that id
    /// - `Err(DbErr)` - Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Product>, DbErr> {
        let row = entity::prelude::Product::find_by_id(id)
            .find_also_related(entity::prelude::Category)
            .one(self.db)
            .await?;

        Ok(row.map(|(product, category)| Product::from_entity_with_category(product, category)))
    }

    /// Gets every product whose category id equals `category_id`, with the category joined.
    ///
    /// An unknown category yields an empty list.
    pub async fn get_by_category_id(&self, category_id: i32) -> Result<Vec<Product>, DbErr> {
        let rows = entity::prelude::Product::find()
            .filter(entity::product::Column::CategoryId.eq(category_id))
            .find_also_related(entity::prelude::Category)
            .order_by_asc(entity::product::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(product, category)| Product::from_entity_with_category(product, category))
            .collect())
    }

    /// Finds a product row without joining its category.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Product>, DbErr> {
        let product = entity::prelude::Product::find_by_id(id).one(self.db).await?;

        Ok(product.map(Product::from_entity))
    }

    /// Inserts a new product; the database assigns the id.
    ///
    /// Fails with a foreign key error when the category does not exist.
    pub async fn create(&self, params: ProductParams) -> Result<Product, DbErr> {
        let product = entity::product::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            price: ActiveValue::Set(params.price),
            category_id: ActiveValue::Set(params.category_id),
        }
        .insert(self.db)
        .await?;

        Ok(Product::from_entity(product))
    }

    /// Overwrites every column of the product with the given id.
    ///
    /// Existence is not checked beforehand: when no row matches, SeaORM reports
    /// `DbErr::RecordNotUpdated`.
    pub async fn update(&self, id: i32, params: ProductParams) -> Result<Product, DbErr> {
        let product = entity::product::ActiveModel {
            id: ActiveValue::Unchanged(id),
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            price: ActiveValue::Set(params.price),
            category_id: ActiveValue::Set(params.category_id),
        }
        .update(self.db)
        .await?;

        Ok(Product::from_entity(product))
    }

    /// Deletes a product by id.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows removed (0 when the id did not exist)
    /// - `Err(DbErr)` - Database error
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Product::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
