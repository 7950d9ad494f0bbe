use super::*;

/// Tests the first daily claim of a new player.
///
/// Expected: Ok with the starting balance plus the bonus
#[tokio::test]
async fn credits_bonus_on_first_claim() -> Result<(), AppError> {
    let test = casino_builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let today = NaiveDate::from_ymd_opt(2030, 1, 15).unwrap();

    let balance = CasinoService::new(db).claim_daily(user.id, today).await?;

    assert_eq!(balance.balance, STARTING_BALANCE + DAILY_BONUS);
    assert_eq!(balance.last_daily_claim, Some(today));
    assert!(!balance.can_claim_daily(today));

    Ok(())
}

/// Tests claiming twice on the same day and again on the next.
///
/// Expected: second claim fails with DailyAlreadyClaimed, next day succeeds
#[tokio::test]
async fn one_claim_per_day() -> Result<(), AppError> {
    let test = casino_builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let service = CasinoService::new(db);
    let today = NaiveDate::from_ymd_opt(2030, 1, 15).unwrap();

    service.claim_daily(user.id, today).await?;
    let again = service.claim_daily(user.id, today).await;

    assert!(matches!(
        again,
        Err(AppError::CasinoErr(CasinoError::DailyAlreadyClaimed))
    ));
    assert_eq!(
        service.get_balance(user.id).await?.balance,
        STARTING_BALANCE + DAILY_BONUS
    );

    let tomorrow = today.succ_opt().unwrap();
    let balance = service.claim_daily(user.id, tomorrow).await?;
    assert_eq!(balance.balance, STARTING_BALANCE + 2 * DAILY_BONUS);

    Ok(())
}
