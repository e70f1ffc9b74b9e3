use sea_orm::DatabaseConnection;

use crate::{
    model::product::ProductPayloadDto,
    server::{
        data::product::ProductRepository,
        error::AppError,
        model::product::{Product, ProductParams},
    },
};

pub struct ProductService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every product with its category
    pub async fn get_all(&self) -> Result<Vec<Product>, AppError> {
        let repo = ProductRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a product by id, failing with NotFound when it doesn't exist
    pub async fn get_by_id(&self, id: i32) -> Result<Product, AppError> {
        let repo = ProductRepository::new(self.db);

        repo.get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Product not found".to_string()))
    }

    /// Gets the products of a category; an unknown category yields an empty list
    pub async fn get_by_category_id(&self, category_id: i32) -> Result<Vec<Product>, AppError> {
        let repo = ProductRepository::new(self.db);

        Ok(repo.get_by_category_id(category_id).await?)
    }

    /// Validates the payload and inserts a new product.
    ///
    /// The payload id is ignored; the database assigns one.
    pub async fn create(&self, payload: ProductPayloadDto) -> Result<Product, AppError> {
        let params = ProductParams::from_payload(payload).map_err(AppError::Validation)?;

        let repo = ProductRepository::new(self.db);

        repo.create(params).await.map_err(|err| {
            tracing::warn!("Failed to create product: {}", err);
            AppError::BadRequest("Unable to create product".to_string())
        })
    }

    /// Overwrites every field of product `id` with the payload.
    ///
    /// The payload id must equal `id` (a missing payload id counts as 0); the check
    /// runs before validation so a mismatched request never reaches the database.
    /// Existence isn't checked separately: updating a missing row is a storage failure.
    pub async fn replace(&self, id: i32, payload: ProductPayloadDto) -> Result<Product, AppError> {
        if payload.id.unwrap_or(0) != id {
            return Err(AppError::NotFound(format!(
                "Product '{}' not found",
                payload.title.as_deref().unwrap_or_default()
            )));
        }

        let params = ProductParams::from_payload(payload).map_err(AppError::Validation)?;

        let repo = ProductRepository::new(self.db);

        repo.update(id, params).await.map_err(|err| {
            tracing::warn!("Failed to update product {}: {}", id, err);
            AppError::BadRequest("Unable to update product".to_string())
        })
    }

    /// Deletes a product and returns it as it was before removal
    pub async fn delete(&self, id: i32) -> Result<Product, AppError> {
        let repo = ProductRepository::new(self.db);

        let Some(product) = repo.find_by_id(id).await? else {
            return Err(AppError::NotFound("Product not found".to_string()));
        };

        let removed = repo.delete(id).await.map_err(|err| {
            tracing::warn!("Failed to remove product {}: {}", id, err);
            AppError::BadRequest("Unable to remove product".to_string())
        })?;

        // Removed concurrently between the lookup and the delete
        if removed == 0 {
            return Err(AppError::NotFound("Product not found".to_string()));
        }

        Ok(product)
    }
}
