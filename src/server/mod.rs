//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM for database operations on a
//! SQLite file.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business rules between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Sessions, access policies and CORS
//!
//! Supporting modules:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state
//! - **Startup** (`startup`) - Database, migrations, sessions and admin bootstrap
//! - **Router** (`router`) - Route table and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** matches the request; the route group's access policy layer runs first
//! 2. **Controller** converts the DTO to params and calls the service
//! 3. **Service** checks referenced rows and calls the repositories
//! 4. **Data** queries the database and returns domain models
//! 5. **Controller** converts the domain model to a DTO and picks the status code

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
