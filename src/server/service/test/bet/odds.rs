use super::*;

/// Tests pricing a bet on a player without matches.
///
/// Expected: default odds
#[tokio::test]
async fn default_odds_without_history() -> Result<(), AppError> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let target = factory::create_user(db).await?;

    let odds = BetService::new(db)
        .odds(target.id, BetType::Mvp, None)
        .await?;

    assert_eq!(odds.odds, DEFAULT_ODDS);
    assert_eq!(odds.threshold, None);

    Ok(())
}

/// Tests pricing a kills over bet from two 20 kill matches.
///
/// Expected: 1 + threshold / average kills = 1.5
#[tokio::test]
async fn kills_over_priced_from_average() -> Result<(), AppError> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let target = factory::create_user(db).await?;
    for _ in 0..2 {
        let game = factory::create_match(db).await?;
        MatchStatsFactory::new(db, game.id, target.id).build().await?;
    }

    let odds = BetService::new(db)
        .odds(target.id, BetType::KillsOver, Some(10.0))
        .await?;

    assert_eq!(odds.odds, 1.5);
    assert_eq!(odds.threshold, Some(10.0));

    Ok(())
}

/// Tests over bets without a usable threshold.
///
/// Expected: Err(MissingThreshold) for a missing and a negative threshold
#[tokio::test]
async fn over_bet_requires_threshold() -> Result<(), AppError> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let target = factory::create_user(db).await?;
    let service = BetService::new(db);

    for threshold in [None, Some(-1.0)] {
        let result = service.odds(target.id, BetType::KdOver, threshold).await;
        assert!(matches!(
            result,
            Err(AppError::CasinoErr(CasinoError::MissingThreshold(_)))
        ));
    }

    Ok(())
}

/// Tests pricing a bet on an unknown player.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn unknown_target_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = BetService::new(db).odds(999, BetType::Win, None).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
