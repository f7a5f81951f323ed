//! Server-side API backend and business logic.
//!
//! This module contains the complete backend for course evaluation comments: HTTP
//! endpoints, the concurrent comment aggregation engine, data access and startup
//! infrastructure. The backend uses Axum as the web framework and SeaORM for
//! database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Comment aggregation, creation and like handling
//! - **Data Layer** (`data/`) - Database operations, entity-to-domain model conversion and
//!   the collaborator traits the aggregation engine reads through
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Viewer identity extraction
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, comment collaborators, fan-out widths)
//! - **Startup** (`startup`) - Tracing and database initialization
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Middleware** resolves the viewer from the identity header
//! 3. **Controller** checks access, converts DTOs to params, calls service
//! 4. **Service** executes business logic; listings fan out over the collaborators
//! 5. **Data** queries database, converts entities to domain models
//! 6. **Controller** converts domain model to DTO, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
