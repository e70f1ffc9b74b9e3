//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Field rules for incoming payloads are declared here rather than in the handlers.

pub mod auth;
pub mod category;
pub mod product;
pub mod validation;
