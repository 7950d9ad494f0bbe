use super::*;

/// Tests a player without penalties joining an empty list.
///
/// Expected: Ok with the player on the main roster
#[tokio::test]
async fn clean_player_joins_main_roster() -> Result<(), AppError> {
    let test = TestBuilder::new().with_mix_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let mix_day = MixService::new(db).join(user.id, day(), today()).await?;

    assert_eq!(mix_day.viewer_status, MixStatus::Main);
    assert_eq!(mix_day.main_count(), 1);

    Ok(())
}

/// Tests a player with one penalty is benched.
///
/// Expected: Ok with the player on the substitute bench despite free main slots
#[tokio::test]
async fn penalized_player_joins_as_substitute() -> Result<(), AppError> {
    let test = TestBuilder::new().with_mix_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    factory::create_penalty(db, user.id, today()).await?;

    let mix_day = MixService::new(db).join(user.id, day(), today()).await?;

    assert_eq!(mix_day.viewer_status, MixStatus::Substitute);
    assert_eq!(mix_day.viewer_penalties, 1);

    Ok(())
}

/// Tests a player with three penalties cannot join.
///
/// Expected: Err(Suspended) rendered as "suspended", no signup stored
#[tokio::test]
async fn three_penalties_suspend() -> Result<(), AppError> {
    let test = TestBuilder::new().with_mix_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    for _ in 0..3 {
        factory::create_penalty(db, user.id, today()).await?;
    }

    let result = MixService::new(db).join(user.id, day(), today()).await;

    match result {
        Err(AppError::MixErr(err @ MixError::Suspended { penalties: 3 })) => {
            assert_eq!(err.to_string(), "suspended");
        }
        other => panic!("expected suspension, got {:?}", other),
    }
    assert_eq!(
        entity::prelude::MixAvailability::find().count(db).await?,
        0
    );

    Ok(())
}

/// Tests the eleventh clean player lands on the bench.
///
/// Expected: first ten on the main roster, the eleventh a substitute
#[tokio::test]
async fn full_main_roster_overflows_to_bench() -> Result<(), AppError> {
    let test = TestBuilder::new().with_mix_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = MixService::new(db);

    for _ in 0..10 {
        let user = factory::create_user(db).await?;
        service.join(user.id, day(), today()).await?;
    }
    let late = factory::create_user(db).await?;
    let mix_day = service.join(late.id, day(), today()).await?;

    assert_eq!(mix_day.main_count(), 10);
    assert_eq!(mix_day.viewer_status, MixStatus::Substitute);

    Ok(())
}

/// Tests joining the same day twice.
///
/// Expected: Err(AlreadySignedUp)
#[tokio::test]
async fn rejects_second_signup() -> Result<(), AppError> {
    let test = TestBuilder::new().with_mix_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let service = MixService::new(db);

    service.join(user.id, day(), today()).await?;
    let result = service.join(user.id, day(), today()).await;

    assert!(matches!(
        result,
        Err(AppError::MixErr(MixError::AlreadySignedUp(_)))
    ));

    Ok(())
}

/// Tests joining a day that already passed.
///
/// Expected: Err(DateInPast)
#[tokio::test]
async fn rejects_past_date() -> Result<(), AppError> {
    let test = TestBuilder::new().with_mix_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let yesterday = today().pred_opt().unwrap();
    let result = MixService::new(db).join(user.id, yesterday, today()).await;

    assert!(matches!(result, Err(AppError::MixErr(MixError::DateInPast(_)))));

    Ok(())
}
