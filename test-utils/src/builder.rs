use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Add entity tables with `with_table()` (referenced tables first), then call `build()`
/// to create an in-memory SQLite database with those tables.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Match, MatchStats};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Match)
///     .with_table(MatchStats)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
    /// Composite unique indexes of the added tables, created after every table.
    indexes: Vec<IndexCreateStatement>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables with foreign keys must be added after the tables they
    /// reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create the table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.indexes
            .extend(composite_unique_indexes(entity.table_name()));
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables required by the match import pipeline.
    ///
    /// Adds User, Match, MatchStats, CasinoBalance and Bet in dependency order. Bets
    /// are included because an import resolves pending bets on its players.
    pub fn with_match_tables(self) -> Self {
        self.with_table(User)
            .with_table(Match)
            .with_table(MatchStats)
            .with_table(CasinoBalance)
            .with_table(Bet)
    }

    /// Adds the tables required for mix list operations.
    pub fn with_mix_tables(self) -> Self {
        self.with_table(User)
            .with_table(MixAvailability)
            .with_table(MixPenalty)
    }

    /// Adds every table of the portal in dependency order.
    pub fn with_all_tables(self) -> Self {
        self.with_match_tables()
            .with_table(MixAvailability)
            .with_table(MixPenalty)
            .with_table(Payment)
            .with_table(Report)
            .with_table(ChampionshipRegistration)
            .with_table(MonthlyRanking)
            .with_table(News)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}

/// Multi-column unique indexes the migrations create but entities cannot express.
fn composite_unique_indexes(table_name: &str) -> Vec<IndexCreateStatement> {
    let index = match table_name {
        "matches" => Index::create()
            .name("idx_matches_identity")
            .table(Match)
            .col(entity::matches::Column::ExternalMatchId)
            .col(entity::matches::Column::MapNumber)
            .unique()
            .to_owned(),
        "mix_availability" => Index::create()
            .name("idx_mix_availability_user_date")
            .table(MixAvailability)
            .col(entity::mix_availability::Column::UserId)
            .col(entity::mix_availability::Column::Date)
            .unique()
            .to_owned(),
        "monthly_ranking" => Index::create()
            .name("idx_monthly_ranking_month_user")
            .table(MonthlyRanking)
            .col(entity::monthly_ranking::Column::Month)
            .col(entity::monthly_ranking::Column::UserId)
            .unique()
            .to_owned(),
        _ => return Vec::new(),
    };

    vec![index]
}
