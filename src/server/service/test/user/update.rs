use super::*;

/// Tests a user renaming themselves.
///
/// Expected: Ok with the new name
#[tokio::test]
async fn renames_own_profile() -> Result<(), AppError> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = User::from_entity(factory::create_user(db).await?);

    let updated = UserService::new(db)
        .update(
            &user,
            user.id,
            UpdateUserParam {
                name: Some("Renamed".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.name, "Renamed");
    assert!(!updated.is_admin);

    Ok(())
}

/// Tests a regular user granting themselves admin rights.
///
/// Expected: Err(AccessDenied) and the flag unchanged
#[tokio::test]
async fn non_admin_cannot_grant_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = User::from_entity(factory::create_user(db).await?);
    let service = UserService::new(db);

    let result = service
        .update(
            &user,
            user.id,
            UpdateUserParam {
                is_admin: Some(true),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    assert!(!service.get_by_id(user.id).await?.is_admin);

    Ok(())
}

/// Tests an admin promoting another user.
///
/// Expected: Ok with the admin flag set
#[tokio::test]
async fn admin_grants_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = User::from_entity(factory::create_admin(db).await?);
    let user = factory::create_user(db).await?;

    let updated = UserService::new(db)
        .update(
            &admin,
            user.id,
            UpdateUserParam {
                is_admin: Some(true),
                ..Default::default()
            },
        )
        .await?;

    assert!(updated.is_admin);

    Ok(())
}

/// Tests clearing the name.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_empty_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = User::from_entity(factory::create_user(db).await?);

    let result = UserService::new(db)
        .update(
            &user,
            user.id,
            UpdateUserParam {
                name: Some(String::new()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
