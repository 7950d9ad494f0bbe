use super::*;

/// Tests that admins see every payment and players only their own.
///
/// Expected: admin sees 2, each player sees 1 pending payment of their own
#[tokio::test]
async fn visibility_depends_on_role() -> Result<(), AppError> {
    let test = payment_builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = User::from_entity(factory::create_admin(db).await?);
    let alice = User::from_entity(factory::create_user(db).await?);
    let bob = User::from_entity(factory::create_user(db).await?);
    let service = PaymentService::new(db);

    service.create(param(alice.id, 1500)).await?;
    service.create(param(bob.id, 2500)).await?;

    assert_eq!(service.get_visible(&admin).await?.len(), 2);

    let own = service.get_visible(&alice).await?;
    assert_eq!(own.len(), 1);
    assert_eq!(own[0].user_id, alice.id);
    assert_eq!(own[0].amount, 1500);
    assert_eq!(own[0].status, PaymentStatus::Pending);

    Ok(())
}

/// Tests a non-positive amount.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_non_positive_amount() -> Result<(), AppError> {
    let test = payment_builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let result = PaymentService::new(db).create(param(user.id, 0)).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests a payment for a user that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_unknown_user() -> Result<(), AppError> {
    let test = payment_builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PaymentService::new(db).create(param(9999, 1000)).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
