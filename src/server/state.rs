//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request handler
//! through Axum's state extraction. It includes:
//! - Database connection pool for data persistence
//! - One-time login codes, including the admin bootstrap code
//! - Access policy for the aggregate report routes

use sea_orm::DatabaseConnection;

use crate::server::{middleware::auth::AccessPolicy, service::login_code::LoginCodeService};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a connection pool and
/// `LoginCodeService` shares its code table through an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Outstanding one-time login codes.
    pub login_codes: LoginCodeService,

    /// Policy enforced on the aggregate report routes.
    pub report_access: AccessPolicy,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `login_codes` - Outstanding login codes
    /// - `report_access` - Policy for report routes
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        login_codes: LoginCodeService,
        report_access: AccessPolicy,
    ) -> Self {
        Self {
            db,
            login_codes,
            report_access,
        }
    }
}
