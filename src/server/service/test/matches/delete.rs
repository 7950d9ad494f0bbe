use super::*;

/// Tests deleting one of a player's two matches.
///
/// Expected: match and its rows gone, player totals recomputed from the remaining match
#[tokio::test]
async fn recalculates_players_of_deleted_match() -> Result<(), AppError> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let kept = factory::create_match(db).await?;
    MatchStatsFactory::new(db, kept.id, user.id)
        .kdh(20, 10, 10)
        .build()
        .await?;
    let removed = factory::create_match(db).await?;
    MatchStatsFactory::new(db, removed.id, user.id)
        .kdh(7, 15, 2)
        .build()
        .await?;

    MatchService::new(db).delete(removed.id).await?;

    assert!(entity::prelude::Match::find_by_id(removed.id)
        .one(db)
        .await?
        .is_none());
    let refreshed = entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(refreshed.total_matches, 1);
    assert_eq!(refreshed.total_kills, 20);
    assert_eq!(refreshed.total_deaths, 10);

    Ok(())
}

/// Tests deleting a match that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn unknown_match_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = MatchService::new(db).delete(404).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
