//! HTTP request handlers.
//!
//! Controllers extract path and body values, call into the service layer and
//! convert domain models to DTOs. Each handler carries a `utoipa::path`
//! annotation that feeds the generated OpenAPI document.

pub mod category;
pub mod product;

#[cfg(test)]
mod test;
