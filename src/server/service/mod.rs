//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer.
//! They apply the product rules (payload validation, id matching on replace, mapping
//! of storage failures to user-facing errors) and work with domain models rather
//! than DTOs or entity models.

pub mod product;
pub mod token;
