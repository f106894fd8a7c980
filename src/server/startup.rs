//! Startup helpers: database, session store and admin bootstrap.

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use time::Duration;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config, data::user::UserRepository, error::AppError,
    service::login_code::LoginCodeService,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema is up-to-date.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;
    tracing::info!("Connected to database");

    Migrator::up(&db, None).await?;
    tracing::info!("Database migrations applied");

    Ok(db)
}

/// Creates the session layer backed by the same Sqlite pool as the database.
///
/// Sessions expire after 7 days of inactivity. The cookie is `SameSite=None` and secure
/// since the dashboard frontend is served from a different origin.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Session layer with the store table migrated
/// - `Err(AppError::DbErr)` - Failed to create the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store
        .migrate()
        .await
        .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(true)
        .with_same_site(SameSite::None)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(session_layer)
}

/// Generates an admin bootstrap code when no admin account exists.
///
/// The code is logged so the operator can claim it through `POST /api/auth/admin`.
///
/// # Returns
/// - `Ok(Some(code))` - No admin existed, a code was generated
/// - `Ok(None)` - An admin already exists
/// - `Err(AppError::DbErr)` - Failed to query for admins
pub async fn check_for_admin(
    db: &DatabaseConnection,
    login_codes: &LoginCodeService,
) -> Result<Option<String>, AppError> {
    if UserRepository::new(db).admin_exists().await? {
        return Ok(None);
    }

    let code = login_codes.issue_bootstrap().await;

    tracing::info!(
        "No admin account exists. Claim admin within 5 minutes with POST /api/auth/admin and code: {}",
        code
    );

    Ok(Some(code))
}
