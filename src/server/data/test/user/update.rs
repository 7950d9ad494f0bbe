use super::*;

/// Tests a partial update only touches provided fields.
///
/// Expected: Ok(Some) with the new name and unchanged admin flag
#[tokio::test]
async fn applies_partial_update() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_admin(db).await?;

    let updated = UserRepository::new(db)
        .update(
            user.id,
            UpdateUserParam {
                name: Some("Renamed".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert!(updated.is_admin);
    assert_eq!(updated.steam_id, user.steam_id);

    Ok(())
}

/// Tests updating a missing user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db)
        .update(999, UpdateUserParam::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}
