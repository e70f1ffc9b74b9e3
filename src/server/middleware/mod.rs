//! Request middleware.
//!
//! - `auth` - Attaches the bearer token caller to each request

pub mod auth;
