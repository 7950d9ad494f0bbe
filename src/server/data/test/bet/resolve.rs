use super::*;

/// Tests a placed bet is stored pending and listed for its target.
///
/// Expected: pending bet returned by `get_pending_by_targets`
#[tokio::test]
async fn lists_pending_bets_by_target() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_match_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let bettor = factory::create_user(db).await?;
    let target = factory::create_user(db).await?;
    let repo = BetRepository::new(db);

    let bet = repo
        .create(CreateBetParam {
            bettor_id: bettor.id,
            target_user_id: target.id,
            bet_type: BetType::KillsOver,
            threshold: Some(18.5),
            amount: 50,
            odds: 1.8,
        })
        .await?;

    assert_eq!(bet.status, BetStatus::Pending);
    assert_eq!(bet.bet_type, BetType::KillsOver);

    let pending = repo.get_pending_by_targets(&[target.id]).await?;
    assert_eq!(pending.len(), 1);
    assert!(repo.get_pending_by_targets(&[bettor.id]).await?.is_empty());

    Ok(())
}

/// Tests a bet is only settled once.
///
/// Expected: true for the first resolution, false afterwards
#[tokio::test]
async fn settles_only_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_match_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let bettor = factory::create_user(db).await?;
    let target = factory::create_user(db).await?;
    let game = factory::create_match(db).await?;
    let bet = factory::casino::BetFactory::new(db, bettor.id, target.id)
        .amount(100)
        .odds(2.5)
        .build()
        .await?;

    let repo = BetRepository::new(db);
    assert!(repo.resolve(bet.id, BetStatus::Won, game.id, 250).await?);
    assert!(!repo.resolve(bet.id, BetStatus::Lost, game.id, 0).await?);

    let stored = repo.get_by_bettor(bettor.id).await?;
    assert_eq!(stored[0].status, BetStatus::Won);
    assert_eq!(stored[0].payout, 250);
    assert_eq!(stored[0].match_id, Some(game.id));
    assert!(stored[0].resolved_at.is_some());

    Ok(())
}
