//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a category and a product belonging to it, both with default values.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((category, product))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_product_with_category(
    db: &DatabaseConnection,
) -> Result<(entity::category::Model, entity::product::Model), DbErr> {
    let category = crate::factory::category::create_category(db).await?;
    let product = crate::factory::product::create_product(db, category.id).await?;

    Ok((category, product))
}
