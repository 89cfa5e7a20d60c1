//! Server-side API backend and business logic.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, input validation and DTO conversion
//! - **Service Layer** (`service/`) - Uniqueness and existence rules, transactions, relating
//! - **Data Layer** (`data/`) - SeaORM queries and the hand-written paged SQL
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool)
//! - **Startup** (`startup`) - Database connection and migrations
//! - **Router** (`router`) - Axum route table
//! - **Doc** (`doc`) - OpenAPI document
//! - **Extract** (`extract`) - Validating JSON and query extractors
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** extracts and validates input, converts DTOs to params, calls a service
//! 3. **Service** checks business rules and runs repository calls, in a transaction for writes
//! 4. **Data** queries the database and returns entity models
//! 5. **Controller** converts the domain model to a DTO and returns the response

pub mod config;
pub mod controller;
pub mod data;
pub mod doc;
pub mod error;
pub mod extract;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
