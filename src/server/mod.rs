//! Server-side API backend and business logic.
//!
//! This module contains the storefront HTTP API: product and category endpoints,
//! business rules, data access and the infrastructure that wires them together.
//! The backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Product rules and token handling
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models, params and validation
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer token authentication
//! - **Extractors** (`extract`) - JSON body extraction with application error rejections
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB pool, token service)
//! - **Startup** (`startup`) - Tracing, database connection and migrations
//! - **Router** (`router`) - Route table, OpenAPI document and Swagger UI
//!
//! # Request Flow
//!
//! 1. **Router** receives the request; tracing and compression wrap it
//! 2. **Middleware** attaches the caller resolved from the bearer token
//! 3. **Controller** extracts path and body, calls the service
//! 4. **Service** validates and applies the product rules
//! 5. **Data** queries the database, converts entities to domain models
//! 6. **Controller** converts the domain model to a DTO and responds

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
