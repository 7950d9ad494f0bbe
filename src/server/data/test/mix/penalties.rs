use super::*;

/// Tests penalty counting per user.
///
/// Expected: counts for penalised users only
#[tokio::test]
async fn counts_penalties_per_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mix_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let clean = factory::create_user(db).await?;
    let flaky = factory::create_user(db).await?;
    factory::create_penalty(db, flaky.id, day()).await?;
    factory::create_penalty(db, flaky.id, day().succ_opt().unwrap()).await?;

    let repo = MixRepository::new(db);
    let counts = repo.penalty_counts(&[clean.id, flaky.id]).await?;

    assert_eq!(counts.get(&flaky.id), Some(&2));
    assert_eq!(counts.get(&clean.id), None);
    assert_eq!(repo.count_penalties(flaky.id).await?, 2);
    assert_eq!(repo.count_penalties(clean.id).await?, 0);

    Ok(())
}

/// Tests creating and removing a penalty.
///
/// Expected: penalty listed after creation and gone after deletion
#[tokio::test]
async fn creates_and_deletes_penalty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mix_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let user = factory::create_user(db).await?;
    let repo = MixRepository::new(db);

    let penalty = repo
        .create_penalty(CreatePenaltyParam {
            user_id: user.id,
            date: day(),
            reason: "did not show up".to_string(),
            created_by: Some(admin.id),
        })
        .await?;

    let listed = repo.get_penalties(Some(user.id)).await?;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].reason, "did not show up");
    assert_eq!(listed[0].created_by, Some(admin.id));

    assert!(repo.delete_penalty(penalty.id).await?);
    assert!(repo.get_penalties(None).await?.is_empty());

    Ok(())
}
