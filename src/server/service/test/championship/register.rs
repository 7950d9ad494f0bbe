use super::*;

/// Tests a first registration.
///
/// Expected: Ok with a pending registration
#[tokio::test]
async fn registers_as_pending() -> Result<(), AppError> {
    let test = championship_builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let registration = ChampionshipService::new(db).register(param(user.id)).await?;

    assert_eq!(registration.user_id, user.id);
    assert_eq!(registration.status, RegistrationStatus::Pending);

    Ok(())
}

/// Tests registering the same user twice.
///
/// Expected: Err(Conflict) and a single registration stored
#[tokio::test]
async fn rejects_second_registration() -> Result<(), AppError> {
    let test = championship_builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let service = ChampionshipService::new(db);

    service.register(param(user.id)).await?;
    let result = service.register(param(user.id)).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(service.get_all().await?.len(), 1);

    Ok(())
}

/// Tests approving and then withdrawing a registration.
///
/// Expected: status updated, withdrawal removes it, a second withdrawal is NotFound
#[tokio::test]
async fn approve_then_withdraw() -> Result<(), AppError> {
    let test = championship_builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let service = ChampionshipService::new(db);
    let registration = service.register(param(user.id)).await?;

    let approved = service
        .update_status(registration.id, RegistrationStatus::Approved)
        .await?;
    assert_eq!(approved.status, RegistrationStatus::Approved);

    service.withdraw(registration.id).await?;
    assert!(matches!(
        service.withdraw(registration.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
