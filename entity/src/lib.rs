//! SeaORM entity models for the storefront database.

pub mod prelude;

pub mod category;
pub mod product;
pub mod user;
