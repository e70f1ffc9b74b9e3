use crate::server::{data::product::ProductRepository, model::product::ProductParams};
use rust_decimal::Decimal;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod get_all;
mod update;

fn params(title: &str, category_id: i32) -> ProductParams {
    ProductParams {
        title: title.to_string(),
        description: "Choc chip".to_string(),
        price: Decimal::new(975, 2),
        category_id,
    }
}
