use super::*;

/// Tests totals are the field-by-field sum of the user's match rows.
///
/// Verifies kills, matches and MVP count across two matches and the derived
/// skill rating.
///
/// Expected: Ok(Some) with summed totals
#[tokio::test]
async fn sums_match_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_match_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let first = factory::matches::MatchFactory::new(db).build().await?;
    let second = factory::matches::MatchFactory::new(db).build().await?;

    factory::match_stats::MatchStatsFactory::new(db, first.id, user.id)
        .kdh(25, 10, 10)
        .damage(2500)
        .aces(1)
        .mvp(true)
        .build()
        .await?;
    factory::match_stats::MatchStatsFactory::new(db, second.id, user.id)
        .kdh(15, 10, 5)
        .damage(1500)
        .build()
        .await?;

    let updated = UserRepository::new(db)
        .recalculate_user_stats(user.id)
        .await?
        .unwrap();

    assert_eq!(updated.totals.kills, 40);
    assert_eq!(updated.totals.deaths, 20);
    assert_eq!(updated.totals.headshots, 15);
    assert_eq!(updated.totals.damage, 4000);
    assert_eq!(updated.totals.matches, 2);
    assert_eq!(updated.totals.mvps, 1);
    assert_eq!(updated.totals.aces, 1);
    // kd 2.0, hs 37.5%, adr 2000: 1000 + 200 + 75 + 200
    assert_eq!(updated.skill_rating, 1475);

    Ok(())
}

/// Tests recalculation is idempotent.
///
/// Expected: identical users from two consecutive runs
#[tokio::test]
async fn is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_match_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::create_user(db).await?;
    let b = factory::create_user(db).await?;
    factory::helpers::create_match_with_players(db, &[a.clone(), b]).await?;

    let repo = UserRepository::new(db);
    let first = repo.recalculate_user_stats(a.id).await?.unwrap();
    let second = repo.recalculate_user_stats(a.id).await?.unwrap();

    assert_eq!(first, second);
    assert_eq!(first.totals.matches, 1);

    Ok(())
}

/// Tests a user whose rows are gone drops back to zero.
///
/// Expected: zero totals and the base rating
#[tokio::test]
async fn resets_without_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_match_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .totals(12, 240)
        .skill_rating(1700)
        .build()
        .await?;

    let updated = UserRepository::new(db)
        .recalculate_user_stats(user.id)
        .await?
        .unwrap();

    assert_eq!(updated.totals.kills, 0);
    assert_eq!(updated.totals.matches, 0);
    assert_eq!(updated.skill_rating, 1000);

    Ok(())
}
