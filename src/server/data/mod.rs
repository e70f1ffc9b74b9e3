//! Database repository layer.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Categories and users have no repository of their own: categories are only read
//! through product joins, and no endpoint touches users.

pub mod product;
