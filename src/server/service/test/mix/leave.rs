use super::*;

/// Tests a main roster player leaving with substitutes waiting.
///
/// Expected: earliest substitute without penalties is promoted, penalized one stays benched
#[tokio::test]
async fn promotes_earliest_clean_substitute() -> Result<(), AppError> {
    let test = TestBuilder::new().with_mix_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let leaving = factory::create_user(db).await?;
    let penalized = factory::create_user(db).await?;
    let clean = factory::create_user(db).await?;
    factory::create_penalty(db, penalized.id, today()).await?;

    factory::create_signup(db, leaving.id, day(), false).await?;
    factory::create_signup(db, penalized.id, day(), true).await?;
    factory::create_signup(db, clean.id, day(), true).await?;

    let mix_day = MixService::new(db).leave(leaving.id, day()).await?;

    assert_eq!(mix_day.viewer_status, MixStatus::NotSignedUp);
    let promoted = mix_day
        .signups
        .iter()
        .find(|signup| signup.user_id == clean.id)
        .unwrap();
    assert!(!promoted.is_substitute);
    let benched = mix_day
        .signups
        .iter()
        .find(|signup| signup.user_id == penalized.id)
        .unwrap();
    assert!(benched.is_substitute);

    Ok(())
}

/// Tests a substitute leaving.
///
/// Expected: nobody is promoted
#[tokio::test]
async fn substitute_leaving_promotes_nobody() -> Result<(), AppError> {
    let test = TestBuilder::new().with_mix_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let leaving = factory::create_user(db).await?;
    let waiting = factory::create_user(db).await?;
    factory::create_signup(db, leaving.id, day(), true).await?;
    factory::create_signup(db, waiting.id, day(), true).await?;

    let mix_day = MixService::new(db).leave(leaving.id, day()).await?;

    assert_eq!(mix_day.main_count(), 0);
    assert_eq!(mix_day.signups.len(), 1);

    Ok(())
}

/// Tests leaving without a signup.
///
/// Expected: Err(NotSignedUp)
#[tokio::test]
async fn rejects_leave_without_signup() -> Result<(), AppError> {
    let test = TestBuilder::new().with_mix_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let result = MixService::new(db).leave(user.id, day()).await;

    assert!(matches!(result, Err(AppError::MixErr(MixError::NotSignedUp(_)))));

    Ok(())
}
