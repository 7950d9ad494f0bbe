use time::Duration;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config, data::user::UserRepository, error::AppError,
    service::admin::code::AdminCodeService,
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
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application's Sqlite database.
///
/// Sessions expire after 7 days of inactivity. The session table is created on first
/// start.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer to attach to the router
/// - `Err(AppError::SqlxErr)` - Failed to create the session table
pub async fn connect_to_session(
    db: &sea_orm::DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store.migrate().await?;

    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(session_layer)
}

/// Builds the HTTP client used for Steam requests.
///
/// Redirects are disabled so OpenID verification cannot be bounced to another host.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(std::time::Duration::from_secs(10))
        .build()?;

    Ok(client)
}

/// Logs a one-time admin login link when no admin exists yet.
///
/// The link embeds a code generated by `AdminCodeService`; logging in through it grants
/// admin to the Steam account that completes the login.
pub async fn check_for_admin(
    db: &sea_orm::DatabaseConnection,
    config: &Config,
    admin_code_service: &AdminCodeService,
) -> Result<(), AppError> {
    let user_repo = UserRepository::new(db);

    if user_repo.admin_exists().await? {
        return Ok(());
    }

    let code = admin_code_service.generate().await;

    tracing::info!(
        "No admin user found, log in within 60 seconds to become admin: {}/api/auth/login?code={}",
        config.app_url,
        code
    );

    Ok(())
}
