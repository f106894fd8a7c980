//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Existence checks and not-found decisions
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod auth;
pub mod field;
pub mod login_code;
pub mod mark;
pub mod report;
pub mod student;
pub mod subject;
