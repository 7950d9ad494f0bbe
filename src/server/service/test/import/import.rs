use super::*;

const FOUR_PLAYERS: [Row<'static>; 4] = [
    (1, "CT", 12, 8),
    (2, "TERRORIST", 9, 11),
    (3, "CT", 8, 7),
    (4, "TERRORIST", 6, 12),
];

/// Tests importing N valid rows creates one match and N stat rows.
///
/// Expected: Ok with 4 players imported, 1 match row, 4 stat rows and 4 new users
#[tokio::test]
async fn creates_one_match_and_a_row_per_player() -> Result<(), AppError> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let outcome = ImportService::new(db)
        .import(param(csv("5001", &FOUR_PLAYERS)))
        .await?;

    assert_eq!(outcome.players_imported, 4);
    assert_eq!(outcome.skipped_rows, 0);
    assert_eq!(outcome.game.external_match_id, "5001");
    assert_eq!(outcome.game.map, "de_inferno");
    assert_eq!(entity::prelude::Match::find().count(db).await?, 1);
    assert_eq!(entity::prelude::MatchStats::find().count(db).await?, 4);
    assert_eq!(entity::prelude::User::find().count(db).await?, 4);

    Ok(())
}

/// Tests exactly one player of an imported match is flagged MVP.
///
/// Expected: one MVP row, belonging to the top fragger and reported as `mvp_user_id`
#[tokio::test]
async fn flags_exactly_one_mvp() -> Result<(), AppError> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let outcome = ImportService::new(db)
        .import(param(csv("5002", &FOUR_PLAYERS)))
        .await?;

    let mvps = entity::prelude::MatchStats::find()
        .filter(entity::match_stats::Column::IsMvp.eq(true))
        .all(db)
        .await?;
    assert_eq!(mvps.len(), 1);
    assert_eq!(Some(mvps[0].user_id), outcome.mvp_user_id);

    let top_fragger = entity::prelude::User::find()
        .filter(entity::user::Column::SteamId.eq(steam_id(1)))
        .one(db)
        .await?
        .unwrap();
    assert_eq!(outcome.mvp_user_id, Some(top_fragger.id));

    Ok(())
}

/// Tests re-importing the same match identity.
///
/// Expected: Err(Duplicate) carrying the existing match and no new rows
#[tokio::test]
async fn rejects_reimport() -> Result<(), AppError> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = ImportService::new(db);

    let first = service.import(param(csv("5003", &FOUR_PLAYERS))).await?;
    let result = service.import(param(csv("5003", &FOUR_PLAYERS))).await;

    match result {
        Err(AppError::ImportErr(ImportError::Duplicate(existing))) => {
            assert_eq!(existing.id, first.game.id);
        }
        other => panic!("expected duplicate error, got {:?}", other),
    }
    assert_eq!(entity::prelude::Match::find().count(db).await?, 1);
    assert_eq!(entity::prelude::MatchStats::find().count(db).await?, 4);

    Ok(())
}

/// Tests a second map of the same series is a separate match.
///
/// Expected: Ok, two match rows
#[tokio::test]
async fn imports_next_map_of_series() -> Result<(), AppError> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = ImportService::new(db);

    service.import(param(csv("5004", &FOUR_PLAYERS))).await?;
    let second_map = csv("5004", &FOUR_PLAYERS).replace("5004,0,", "5004,1,");
    let outcome = service.import(param(second_map)).await?;

    assert_eq!(outcome.game.map_number, 1);
    assert_eq!(entity::prelude::Match::find().count(db).await?, 2);
    assert_eq!(entity::prelude::User::find().count(db).await?, 4);

    Ok(())
}

/// Tests scores derived from team kills when none are given.
///
/// Expected: CT with 20 kills and TERRORIST with 15 give 4-3 with CT as winner
#[tokio::test]
async fn derives_score_from_team_kills() -> Result<(), AppError> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let outcome = ImportService::new(db)
        .import(param(csv("5005", &FOUR_PLAYERS)))
        .await?;

    assert_eq!(outcome.game.team1_name, "CT");
    assert_eq!(outcome.game.team2_name, "TERRORIST");
    assert_eq!(outcome.game.team1_score, 4);
    assert_eq!(outcome.game.team2_score, 3);
    assert_eq!(outcome.game.winner_team.as_deref(), Some("CT"));

    Ok(())
}

/// Tests explicit score and winner override the derived values.
///
/// Expected: Ok with the given 11-13 score and TERRORIST as winner
#[tokio::test]
async fn uses_explicit_result() -> Result<(), AppError> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let outcome = ImportService::new(db)
        .import(ImportMatchParam {
            winner_team: Some("TERRORIST".to_string()),
            team1_score: Some(11),
            team2_score: Some(13),
            ..param(csv("5006", &FOUR_PLAYERS))
        })
        .await?;

    assert_eq!((outcome.game.team1_score, outcome.game.team2_score), (11, 13));
    assert_eq!(outcome.game.winner_team.as_deref(), Some("TERRORIST"));

    Ok(())
}

/// Tests an explicit winner that names neither team of the CSV.
///
/// Expected: Err(InvalidRequest) and nothing written
#[tokio::test]
async fn rejects_winner_outside_match() -> Result<(), AppError> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ImportService::new(db)
        .import(ImportMatchParam {
            winner_team: Some("NAVI".to_string()),
            ..param(csv("5007", &FOUR_PLAYERS))
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::ImportErr(ImportError::InvalidRequest(_)))
    ));
    assert_eq!(entity::prelude::Match::find().count(db).await?, 0);
    assert_eq!(entity::prelude::MatchStats::find().count(db).await?, 0);

    Ok(())
}

/// Tests player totals after an import equal the sum of their stat rows.
///
/// Expected: total_kills of an existing player is the sum over both imported matches
#[tokio::test]
async fn refreshes_player_totals() -> Result<(), AppError> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = ImportService::new(db);

    let existing = factory::user::UserFactory::new(db)
        .steam_id(steam_id(1))
        .name("Known Name")
        .build()
        .await?;

    service.import(param(csv("5007", &FOUR_PLAYERS))).await?;
    service
        .import(param(csv("5008", &[(1, "CT", 17, 9), (2, "TERRORIST", 4, 15)])))
        .await?;

    let user = entity::prelude::User::find_by_id(existing.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(user.total_kills, 12 + 17);
    assert_eq!(user.total_deaths, 8 + 9);
    assert_eq!(user.total_matches, 2);
    assert_eq!(user.name, "Known Name");

    Ok(())
}

/// Tests spectator and malformed rows.
///
/// Expected: spectators ignored silently, the malformed row counted as skipped
#[tokio::test]
async fn skips_spectators_and_malformed_rows() -> Result<(), AppError> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut content = csv("5009", &FOUR_PLAYERS);
    content.push_str("5009,0,0,CT,bot,3,3,0,0,300\n");
    content.push_str(&format!("5009,0,{},Spectator,caster,0,0,0,0,0\n", steam_id(9)));
    content.push_str(&format!("5009,0,{},CT,broken,many,3,0,0,300\n", steam_id(10)));

    let outcome = ImportService::new(db).import(param(content)).await?;

    assert_eq!(outcome.players_imported, 4);
    assert_eq!(outcome.skipped_rows, 1);

    Ok(())
}

/// Tests a CSV without any player row.
///
/// Expected: Err(NoValidRows) and nothing written
#[tokio::test]
async fn rejects_csv_without_players() -> Result<(), AppError> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let content = format!("{HEADER}\n5010,0,0,,bot,0,0,0,0,0\n");
    let result = ImportService::new(db).import(param(content)).await;

    assert!(matches!(
        result,
        Err(AppError::ImportErr(ImportError::NoValidRows { skipped: 0 }))
    ));
    assert_eq!(entity::prelude::Match::find().count(db).await?, 0);

    Ok(())
}

/// Tests pending bets on players of the imported match get settled.
///
/// Expected: winning bet pays floor(amount × odds) to the bettor, losing bet pays nothing
#[tokio::test]
async fn resolves_pending_bets() -> Result<(), AppError> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let bettor = factory::create_user(db).await?;
    let winner = factory::user::UserFactory::new(db)
        .steam_id(steam_id(1))
        .build()
        .await?;
    let loser = factory::user::UserFactory::new(db)
        .steam_id(steam_id(2))
        .build()
        .await?;
    factory::create_balance(db, bettor.id, 800).await?;

    let won_bet = factory::casino::BetFactory::new(db, bettor.id, winner.id)
        .bet_type("kills_over", Some(10.5))
        .amount(100)
        .odds(2.5)
        .build()
        .await?;
    let lost_bet = factory::casino::BetFactory::new(db, bettor.id, loser.id)
        .bet_type("win", None)
        .amount(100)
        .build()
        .await?;

    let outcome = ImportService::new(db)
        .import(param(csv("5011", &FOUR_PLAYERS)))
        .await?;

    assert_eq!(outcome.bets_resolved, 2);

    let won_bet = entity::prelude::Bet::find_by_id(won_bet.id).one(db).await?.unwrap();
    assert_eq!(won_bet.status, "won");
    assert_eq!(won_bet.payout, 250);
    assert_eq!(won_bet.match_id, Some(outcome.game.id));

    let lost_bet = entity::prelude::Bet::find_by_id(lost_bet.id).one(db).await?.unwrap();
    assert_eq!(lost_bet.status, "lost");
    assert_eq!(lost_bet.payout, 0);

    let balance = entity::prelude::CasinoBalance::find_by_id(bettor.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(balance.balance, 800 + 250);

    Ok(())
}
