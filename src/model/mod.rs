//! Data transfer objects exchanged with API clients.
//!
//! Every type here is serialized to or deserialized from JSON request and response
//! bodies and carries an OpenAPI schema. Server-side parameter models live in
//! `server::model` and convert to and from these DTOs.

pub mod api;
pub mod category;
pub mod product;
