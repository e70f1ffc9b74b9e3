use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::category::CategoryDto;

/// Product as returned by the API.
///
/// `category` is only populated by read endpoints that join the category table;
/// create and replace echo the stored row with `category` set to `null`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    #[schema(value_type = f64, example = 9.99)]
    pub price: Decimal,
    pub category_id: i32,
    pub category: Option<CategoryDto>,
}

/// Product payload accepted by create and replace.
///
/// Every field is optional at the wire level so that missing fields are reported
/// alongside the other validation failures instead of rejecting the body outright.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayloadDto {
    /// Ignored on create; must equal the path id on replace.
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    #[schema(example = "Cookie")]
    pub title: Option<String>,
    #[serde(default)]
    #[schema(example = "Choc chip")]
    pub description: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<f64>, example = 9.99)]
    pub price: Option<Decimal>,
    #[serde(default)]
    #[schema(example = 1)]
    pub category_id: Option<i32>,
}
