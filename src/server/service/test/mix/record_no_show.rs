use super::*;

/// Tests recording a no-show for a signed up player.
///
/// Expected: penalty stored with the admin as author, signup removed
#[tokio::test]
async fn records_penalty_and_drops_signup() -> Result<(), AppError> {
    let test = TestBuilder::new().with_mix_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::create_admin(db).await?;
    let user = factory::create_user(db).await?;
    factory::create_signup(db, user.id, day(), false).await?;

    let penalty = MixService::new(db)
        .record_no_show(admin.id, user.id, day(), Some("  did not show  ".to_string()))
        .await?;

    assert_eq!(penalty.user_id, user.id);
    assert_eq!(penalty.created_by, Some(admin.id));
    assert_eq!(penalty.reason, "did not show");
    assert_eq!(
        entity::prelude::MixAvailability::find().count(db).await?,
        0
    );

    Ok(())
}

/// Tests the third no-show suspends the player.
///
/// Expected: the next join fails with Err(Suspended)
#[tokio::test]
async fn third_no_show_suspends() -> Result<(), AppError> {
    let test = TestBuilder::new().with_mix_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::create_admin(db).await?;
    let user = factory::create_user(db).await?;
    let service = MixService::new(db);

    for _ in 0..3 {
        service.record_no_show(admin.id, user.id, today(), None).await?;
    }
    let result = service.join(user.id, day(), today()).await;

    assert!(matches!(
        result,
        Err(AppError::MixErr(MixError::Suspended { .. }))
    ));

    Ok(())
}

/// Tests deleting a penalty lifts its effect.
///
/// Expected: Ok, and the player joins the main roster again
#[tokio::test]
async fn deleting_penalty_restores_main_roster() -> Result<(), AppError> {
    let test = TestBuilder::new().with_mix_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let penalty = factory::create_penalty(db, user.id, today()).await?;
    let service = MixService::new(db);

    service.delete_penalty(penalty.id).await?;
    let mix_day = service.join(user.id, day(), today()).await?;

    assert_eq!(mix_day.viewer_status, MixStatus::Main);
    assert!(matches!(
        service.delete_penalty(penalty.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests a no-show for an unknown user.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_mix_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::create_admin(db).await?;

    let result = MixService::new(db)
        .record_no_show(admin.id, admin.id + 100, day(), None)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
