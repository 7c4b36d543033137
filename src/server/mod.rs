//! Server-side API backend and business logic.
//!
//! This module contains the complete backend for the game catalog: remote operation
//! endpoints, service facades, data access, DTO mapping, and infrastructure. The backend
//! uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, one per remote operation
//! - **Service Layer** (`service/`) - Authorization and business rules, returns result envelopes
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and repository parameter types
//! - **Mapping** (`mapping/`) - Domain model to DTO projection and DTO to entity write-back
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Caller resolution from sessions and bearer tokens
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, token issuer)
//! - **Startup** (`startup`) - Initialization of database, sessions, and the seeded admin
//! - **Router** (`router`) - Route table built from the operation constants and the API document
//!
//! # Request Flow
//!
//! 1. **Router** matches `POST /api/<Service>/<Name>` to its controller
//! 2. **Middleware** resolves the caller from a bearer token or the session cookie
//! 3. **Controller** decodes the parameters and calls the service
//! 4. **Service** authorizes the caller before touching the database, then runs the operation
//! 5. **Mapping** projects the loaded domain models onto DTOs along the include tree
//! 6. **Controller** returns the result envelope as JSON
//!
//! # Feature Gates
//!
//! This module is only available with the `server` feature flag enabled.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod extract;
pub mod mapping;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
