use super::*;

/// Tests an anonymous request is rejected.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn rejects_missing_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests a session pointing at a deleted user is rejected.
///
/// Expected: Err(AuthError::UserNotInDatabase) carrying the stale id
#[tokio::test]
async fn rejects_session_user_missing_from_database() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(4242).await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(4242)))
    ));

    Ok(())
}

/// Tests admin user successfully passes admin permission check.
///
/// Expected: Ok(User) with is_admin=true
#[tokio::test]
async fn grants_access_to_admin_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .name("AdminUser")
        .admin(true)
        .build()
        .await?;

    AuthSession::new(session).set_user_id(user.id).await?;

    let returned_user = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await?;

    assert_eq!(returned_user.id, user.id);
    assert_eq!(returned_user.name, "AdminUser");
    assert!(returned_user.is_admin);

    Ok(())
}

/// Tests non-admin user is denied admin permission.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_non_admin_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, message))) => {
            assert_eq!(user_id, user.id);
            assert!(message.contains("admin"));
        }
        other => panic!("Expected AccessDenied, got {:?}", other.map(|u| u.id)),
    }

    Ok(())
}

/// Tests a user may act on their own resources.
///
/// Expected: Ok(User)
#[tokio::test]
async fn self_or_admin_allows_self() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::SelfOrAdmin(user.id)])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests a regular user cannot act on another user's resources while an admin can.
///
/// Expected: AccessDenied for the regular user, Ok for the admin
#[tokio::test]
async fn self_or_admin_rejects_other_users() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let admin = factory::create_admin(db).await?;

    AuthSession::new(session).set_user_id(user.id).await?;
    let denied = AuthGuard::new(db, session)
        .require(&[Permission::SelfOrAdmin(other.id)])
        .await;
    assert!(matches!(
        denied,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    AuthSession::new(session).set_user_id(admin.id).await?;
    let allowed = AuthGuard::new(db, session)
        .require(&[Permission::SelfOrAdmin(other.id)])
        .await?;
    assert_eq!(allowed.id, admin.id);

    Ok(())
}
