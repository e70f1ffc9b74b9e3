//! Parameter and domain models for product operations.
//!
//! `Product` is what repositories hand back to the service layer, and
//! `ProductParams` is a payload that has passed the field rules below. Incoming
//! DTOs are only turned into params through `ProductParams::from_payload`, so the
//! repository never sees an unchecked payload.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::{
    model::product::{ProductDto, ProductPayloadDto},
    server::model::{
        category::Category,
        validation::{required_text, ValidationErrors},
    },
};

pub const TITLE_MIN_LEN: usize = 3;
pub const TITLE_MAX_LEN: usize = 60;
pub const DESCRIPTION_MAX_LEN: usize = 1024;
/// Decimal places kept for prices, matching the `decimal(18, 2)` column.
pub const PRICE_SCALE: u32 = 2;

/// Product with its category resolved when the query joined it.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub price: Decimal,
    pub category_id: i32,
    /// Populated only by read paths that join the category table.
    pub category: Option<Category>,
}

impl Product {
    /// Converts an entity model to a product without its category.
    pub fn from_entity(entity: entity::product::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            price: entity.price,
            category_id: entity.category_id,
            category: None,
        }
    }

    /// Converts a product/category pair from a join query.
    pub fn from_entity_with_category(
        entity: entity::product::Model,
        category: Option<entity::category::Model>,
    ) -> Self {
        Self {
            category: category.map(Category::from_entity),
            ..Self::from_entity(entity)
        }
    }

    pub fn into_dto(self) -> ProductDto {
        ProductDto {
            id: self.id,
            title: self.title,
            description: self.description,
            price: self.price,
            category_id: self.category_id,
            category: self.category.map(Category::into_dto),
        }
    }
}

/// Validated product fields, shared by create and replace.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductParams {
    pub title: String,
    pub description: String,
    pub price: Decimal,
    pub category_id: i32,
}

impl ProductParams {
    /// Applies the product field rules to a payload, collecting every violation.
    ///
    /// - `title`: required, 3 to 60 characters
    /// - `description`: required, at most 1024 characters
    /// - `price`: required, rounded half away from zero to cents, then greater than zero
    /// - `categoryId`: required, positive
    ///
    /// The payload `id` is not inspected here.
    pub fn from_payload(payload: ProductPayloadDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let title = required_text(
            &mut errors,
            "title",
            payload.title,
            TITLE_MIN_LEN,
            TITLE_MAX_LEN,
        );
        let description = required_text(
            &mut errors,
            "description",
            payload.description,
            0,
            DESCRIPTION_MAX_LEN,
        );

        let price = payload.price.map(|price| {
            price.round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero)
        });

        let price = match price {
            None => {
                errors.add("price", "The price field is required");
                None
            }
            Some(price) if price <= Decimal::ZERO => {
                errors.add("price", "The price must be greater than zero");
                None
            }
            Some(price) => Some(price),
        };

        let category_id = match payload.category_id {
            None => {
                errors.add("categoryId", "The categoryId field is required");
                None
            }
            Some(id) if id <= 0 => {
                errors.add("categoryId", "Invalid category");
                None
            }
            Some(id) => Some(id),
        };

        match (title, description, price, category_id) {
            (Some(title), Some(description), Some(price), Some(category_id)) => Ok(Self {
                title,
                description,
                price,
                category_id,
            }),
            _ => Err(errors),
        }
    }
}
