//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let category = factory::create_category(&db).await?;
//! let product = factory::create_product(&db, category.id).await?;
//!
//! // Customized
//! let product = factory::product::ProductFactory::new(&db, category.id)
//!     .title("Cookie")
//!     .price(Decimal::new(975, 2))
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `category` - Create category entities
//! - `product` - Create product entities
//! - `user` - Create user entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod category;
pub mod helpers;
pub mod product;
pub mod user;

pub use category::create_category;
pub use product::create_product;
pub use user::create_user;
