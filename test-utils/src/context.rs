use std::sync::Arc;

use sea_orm::{
    sea_query::{IndexCreateStatement, TableCreateStatement},
    ConnectionTrait, Database, DatabaseConnection, DbErr,
};
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// Isolated environment for a single test: an in-memory SQLite database and a
/// session stored in that same database.
///
/// Both are created on first access and live as long as the context.
#[derive(Default)]
pub struct TestContext {
    pub db: Option<DatabaseConnection>,
    pub session: Option<Session>,
}

impl TestContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the database connection, connecting to `sqlite::memory:` on first use.
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        if self.db.is_none() {
            self.db = Some(Database::connect("sqlite::memory:").await?);
        }

        self.db
            .as_ref()
            .ok_or_else(|| TestError::Database(DbErr::Custom("database missing".to_string())))
    }

    /// Runs the schema statements produced by `TestBuilder`.
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;
        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    pub async fn with_indexes(&mut self, stmts: Vec<IndexCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;
        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Returns the test session, migrating the session table on first use.
    ///
    /// ```rust,ignore
    /// let mut test = TestContext::new();
    /// let session = test.session().await?;
    /// session.insert("user:id", 1).await?;
    /// ```
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        if self.session.is_none() {
            let pool = self.database().await?.get_sqlite_connection_pool().clone();
            let store = SqliteStore::new(pool);
            store
                .migrate()
                .await
                .map_err(|e| DbErr::Custom(e.to_string()))?;

            self.session = Some(Session::new(
                None,
                Arc::new(store),
                Some(Expiry::OnInactivity(Duration::days(7))),
            ));
        }

        self.session
            .as_ref()
            .ok_or_else(|| TestError::Database(DbErr::Custom("session missing".to_string())))
    }

    /// Both handles at once, for tests that pass the database and the session
    /// into the same call.
    pub async fn db_and_session(&mut self) -> Result<(&DatabaseConnection, &Session), TestError> {
        self.session().await?;

        match (self.db.as_ref(), self.session.as_ref()) {
            (Some(db), Some(session)) => Ok((db, session)),
            _ => Err(TestError::Database(DbErr::Custom(
                "test context failed to initialize".to_string(),
            ))),
        }
    }
}
