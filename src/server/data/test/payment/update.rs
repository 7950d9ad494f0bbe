use super::*;

/// Tests marking a payment paid stamps `paid_at` and reopening clears it.
///
/// Expected: paid_at set on Paid, cleared on Pending
#[tokio::test]
async fn tracks_paid_at() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = PaymentRepository::new(db);

    let payment = repo
        .create(CreatePaymentParam {
            user_id: user.id,
            amount: 2500,
            description: "Server rent".to_string(),
            due_date: None,
        })
        .await?;
    assert_eq!(payment.status, PaymentStatus::Pending);
    assert!(payment.paid_at.is_none());

    let paid = repo
        .update(
            payment.id,
            UpdatePaymentParam {
                status: Some(PaymentStatus::Paid),
                ..Default::default()
            },
        )
        .await?
        .unwrap();
    assert_eq!(paid.status, PaymentStatus::Paid);
    assert!(paid.paid_at.is_some());
    assert_eq!(paid.amount, 2500);

    let reopened = repo
        .update(
            payment.id,
            UpdatePaymentParam {
                status: Some(PaymentStatus::Pending),
                ..Default::default()
            },
        )
        .await?
        .unwrap();
    assert!(reopened.paid_at.is_none());

    Ok(())
}

/// Tests listing is filtered by user when requested.
///
/// Expected: all payments unfiltered, only the user's when filtered
#[tokio::test]
async fn filters_by_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::create_user(db).await?;
    let b = factory::create_user(db).await?;
    let repo = PaymentRepository::new(db);

    for user_id in [a.id, a.id, b.id] {
        repo.create(CreatePaymentParam {
            user_id,
            amount: 1000,
            description: "Monthly fee".to_string(),
            due_date: None,
        })
        .await?;
    }

    assert_eq!(repo.get_all(None).await?.len(), 3);
    assert_eq!(repo.get_all(Some(a.id)).await?.len(), 2);
    assert_eq!(repo.get_all(Some(b.id)).await?.len(), 1);

    Ok(())
}
