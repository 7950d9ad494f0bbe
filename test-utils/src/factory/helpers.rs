//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Generates a unique, well-formed SteamID64 for a test user.
pub fn next_steam_id() -> String {
    format!("7656119{:010}", 8_000_000_000 + next_id())
}

/// Creates a match with one stats row for each of the given users.
///
/// The first half of `users` plays for `CT`, the rest for `TERRORIST`. Each player
/// gets the default stat line of `MatchStatsFactory`.
///
/// # Arguments
/// - `db` - Database connection
/// - `users` - Players of the match
///
/// # Returns
/// - `Ok((match, stats))` - Created match and its stats rows in `users` order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_match_with_players(
    db: &DatabaseConnection,
    users: &[entity::user::Model],
) -> Result<(entity::matches::Model, Vec<entity::match_stats::Model>), DbErr> {
    let game = crate::factory::matches::create_match(db).await?;

    let half = users.len().div_ceil(2);
    let mut stats = Vec::with_capacity(users.len());
    for (index, user) in users.iter().enumerate() {
        let team = if index < half { "CT" } else { "TERRORIST" };
        let row = crate::factory::match_stats::MatchStatsFactory::new(db, game.id, user.id)
            .team(team)
            .build()
            .await?;
        stats.push(row);
    }

    Ok((game, stats))
}
