use super::*;

/// Tests signups come back in join order with profiles attached.
///
/// Expected: Ok with signups for the requested day only
#[tokio::test]
async fn lists_day_in_join_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mix_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::user::UserFactory::new(db).name("first").build().await?;
    let second = factory::user::UserFactory::new(db).name("second").build().await?;

    let repo = MixRepository::new(db);
    repo.create_signup(first.id, day(), false).await?;
    repo.create_signup(second.id, day(), true).await?;
    repo.create_signup(first.id, day().succ_opt().unwrap(), false)
        .await?;

    let signups = repo.get_signups_by_date(day()).await?;

    assert_eq!(signups.len(), 2);
    assert_eq!(signups[0].name, "first");
    assert!(!signups[0].is_substitute);
    assert_eq!(signups[1].name, "second");
    assert!(signups[1].is_substitute);

    Ok(())
}

/// Tests the unique index blocks a second signup for the same day.
///
/// Expected: Err on the duplicate insert
#[tokio::test]
async fn rejects_second_signup_same_day() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mix_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = MixRepository::new(db);

    repo.create_signup(user.id, day(), false).await?;
    let result = repo.create_signup(user.id, day(), true).await;

    assert!(result.is_err());

    Ok(())
}

/// Tests promoting a substitute flips the flag in place.
///
/// Expected: the signup is on the main roster afterwards
#[tokio::test]
async fn promotes_substitute() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_mix_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let signup = factory::create_signup(db, user.id, day(), true).await?;

    let repo = MixRepository::new(db);
    repo.set_substitute(signup.id, false).await?;

    let stored = repo.find_signup(user.id, day()).await?.unwrap();
    assert!(!stored.is_substitute);

    Ok(())
}
