use super::*;

/// Tests a series of seeded spins.
///
/// Expected: every spin moves the balance by exactly payout minus bet
#[tokio::test]
async fn balance_tracks_stake_and_payout() -> Result<(), AppError> {
    let test = casino_builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let service = CasinoService::new(db);
    let mut rng = StdRng::seed_from_u64(7);

    let mut expected = STARTING_BALANCE;
    for _ in 0..20 {
        let outcome = service.spin(user.id, 10, &mut rng).await?;

        assert_eq!(outcome.payout, 10 * outcome.multiplier);
        expected = expected - 10 + outcome.payout;
        assert_eq!(outcome.balance, expected);
    }

    assert_eq!(service.get_balance(user.id).await?.balance, expected);

    Ok(())
}

/// Tests bets outside the allowed range.
///
/// Expected: Err(InvalidBet) and the balance is untouched
#[tokio::test]
async fn rejects_out_of_range_bet() -> Result<(), AppError> {
    let test = casino_builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let service = CasinoService::new(db);
    let mut rng = StdRng::seed_from_u64(1);

    for bet in [0, -5, 1001] {
        let result = service.spin(user.id, bet, &mut rng).await;
        assert!(matches!(
            result,
            Err(AppError::CasinoErr(CasinoError::InvalidBet { .. }))
        ));
    }

    assert_eq!(service.get_balance(user.id).await?.balance, STARTING_BALANCE);

    Ok(())
}

/// Tests a spin larger than the balance.
///
/// Expected: Err(InsufficientBalance) reporting the current balance
#[tokio::test]
async fn rejects_spin_above_balance() -> Result<(), AppError> {
    let test = casino_builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    factory::create_balance(db, user.id, 5).await?;
    let mut rng = StdRng::seed_from_u64(1);

    let result = CasinoService::new(db).spin(user.id, 50, &mut rng).await;

    assert!(matches!(
        result,
        Err(AppError::CasinoErr(CasinoError::InsufficientBalance {
            balance: 5,
            required: 50
        }))
    ));

    Ok(())
}
