use super::*;

/// Tests recomputing users whose stored totals drifted from their match rows.
///
/// Expected: totals match the rows, and a second run yields identical users
#[tokio::test]
async fn restores_totals_and_is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::user::UserFactory::new(db)
        .totals(50, 999)
        .build()
        .await?;
    let idle = factory::create_user(db).await?;
    let game = factory::create_match(db).await?;
    MatchStatsFactory::new(db, game.id, user.id)
        .kdh(17, 9, 6)
        .build()
        .await?;
    let service = UserService::new(db);

    assert_eq!(service.recalculate_all().await?, 2);
    let first = service.get_by_id(user.id).await?;
    assert_eq!(first.totals.matches, 1);
    assert_eq!(first.totals.kills, 17);
    assert_eq!(service.get_by_id(idle.id).await?.totals.matches, 0);

    service.recalculate_all().await?;
    let second = service.get_by_id(user.id).await?;
    assert_eq!(first, second);

    Ok(())
}
