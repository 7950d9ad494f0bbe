//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM over SQLite for
//! persistence. Players log in through Steam OpenID.
//!
//! # Architecture
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models, scoring rules and operation parameters
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session wrappers and authentication guards
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, HTTP client, admin code)
//! - **Startup** (`startup`) - Database, sessions, HTTP client and first-admin bootstrap
//! - **Router** (`router`) - Route table, rate limits and OpenAPI document
//!
//! # Request Flow
//!
//! 1. **Router** receives the request and routes it to a controller
//! 2. **Controller** validates access through `AuthGuard`, converts DTOs to params, calls a service
//! 3. **Service** runs business logic, opening a transaction when several writes belong together
//! 4. **Data** queries the database and converts entities to domain models
//! 5. **Controller** converts the domain model to a DTO and returns the response

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
pub mod util;
