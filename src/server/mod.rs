//! Server-side API backend and business logic.
//!
//! Complete backend implementation of the school-management API: HTTP
//! endpoints, business logic, data access, and infrastructure services.
//! The backend uses Axum as the web framework and SeaORM for database
//! operations, with JWT bearer tokens for authentication.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of
//! concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer-token authentication guard
//!
//! Supporting modules provide infrastructure: `config` (environment-based
//! configuration), `state` (shared application state), `startup` (database
//! connection, migrations, CORS), and `router` (route configuration).
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes to a controller
//! 2. **Controller** resolves the caller's claims through the auth guard,
//!    validates the payload, and calls a service
//! 3. **Service** executes business logic, opening a transaction where an
//!    operation must be atomic
//! 4. **Data** queries the database and converts entities to domain models
//! 5. **Controller** converts the domain model to a DTO inside the uniform
//!    response envelope

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
