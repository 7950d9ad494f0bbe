use super::*;

/// Tests a balance is created lazily with the starting chips.
///
/// Expected: STARTING_BALANCE on first access, same row afterwards
#[tokio::test]
async fn creates_balance_lazily() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_match_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = CasinoRepository::new(db);

    assert!(repo.find(user.id).await?.is_none());
    let created = repo.get_or_create(user.id).await?;
    assert_eq!(created.balance, STARTING_BALANCE);

    repo.credit(user.id, 50).await?;
    let again = repo.get_or_create(user.id).await?;
    assert_eq!(again.balance, STARTING_BALANCE + 50);

    Ok(())
}

/// Tests spending never takes the balance below zero.
///
/// Expected: Some(new balance) when covered, None otherwise
#[tokio::test]
async fn spend_requires_cover() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_match_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_balance(db, user.id, 150).await?;
    let repo = CasinoRepository::new(db);

    assert_eq!(repo.spend(user.id, 100).await?, Some(50));
    assert_eq!(repo.spend(user.id, 51).await?, None);
    assert_eq!(repo.spend(user.id, 50).await?, Some(0));

    Ok(())
}

/// Tests the daily bonus is credited once per day.
///
/// Expected: first claim credits, second claim same day is refused, next day works
#[tokio::test]
async fn daily_bonus_once_per_day() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_match_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_balance(db, user.id, 1000).await?;
    let repo = CasinoRepository::new(db);
    let today = NaiveDate::from_ymd_opt(2030, 1, 15).unwrap();

    let claimed = repo.claim_daily(user.id, today, 200).await?.unwrap();
    assert_eq!(claimed.balance, 1200);
    assert_eq!(claimed.last_daily_claim, Some(today));

    assert!(repo.claim_daily(user.id, today, 200).await?.is_none());

    let tomorrow = today.succ_opt().unwrap();
    let claimed = repo.claim_daily(user.id, tomorrow, 200).await?.unwrap();
    assert_eq!(claimed.balance, 1400);

    Ok(())
}
