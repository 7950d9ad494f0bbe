use super::*;

/// Tests placing a bet on a player without history.
///
/// Expected: pending bet at default odds, stake debited from the starting balance
#[tokio::test]
async fn debits_stake_and_stores_pending_bet() -> Result<(), AppError> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let bettor = factory::create_user(db).await?;
    let target = factory::create_user(db).await?;

    let bet = BetService::new(db)
        .place(bettor.id, target.id, BetType::Win, None, 100)
        .await?;

    assert_eq!(bet.status, BetStatus::Pending);
    assert_eq!(bet.odds, DEFAULT_ODDS);
    assert_eq!(bet.amount, 100);
    assert_eq!(CasinoService::new(db).get_balance(bettor.id).await?.balance, 900);

    let mine = BetService::new(db).get_mine(bettor.id).await?;
    assert_eq!(mine.len(), 1);

    Ok(())
}

/// Tests betting on yourself.
///
/// Expected: Err(SelfBet)
#[tokio::test]
async fn rejects_self_bet() -> Result<(), AppError> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let result = BetService::new(db)
        .place(user.id, user.id, BetType::Mvp, None, 100)
        .await;

    assert!(matches!(result, Err(AppError::CasinoErr(CasinoError::SelfBet))));

    Ok(())
}

/// Tests a stake that is zero or above the balance.
///
/// Expected: BadRequest for zero, InsufficientBalance above the balance, no bet stored
#[tokio::test]
async fn rejects_invalid_stake() -> Result<(), AppError> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let bettor = factory::create_user(db).await?;
    let target = factory::create_user(db).await?;
    factory::create_balance(db, bettor.id, 50).await?;
    let service = BetService::new(db);

    let zero = service.place(bettor.id, target.id, BetType::Mvp, None, 0).await;
    assert!(matches!(zero, Err(AppError::BadRequest(_))));

    let too_much = service
        .place(bettor.id, target.id, BetType::Mvp, None, 51)
        .await;
    assert!(matches!(
        too_much,
        Err(AppError::CasinoErr(CasinoError::InsufficientBalance {
            balance: 50,
            required: 51
        }))
    ));

    assert!(service.get_mine(bettor.id).await?.is_empty());
    assert_eq!(CasinoService::new(db).get_balance(bettor.id).await?.balance, 50);

    Ok(())
}
