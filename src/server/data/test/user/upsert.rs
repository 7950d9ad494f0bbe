use super::*;

/// Tests creating a new user on first login.
///
/// Expected: Ok with zeroed totals and the base rating
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserRepository::new(db)
        .upsert(UpsertUserParam {
            steam_id: "76561198000000001".to_string(),
            name: "s1mple".to_string(),
            avatar_url: Some("https://avatars.example/s1mple.jpg".to_string()),
            is_admin: None,
        })
        .await?;

    assert_eq!(user.steam_id, "76561198000000001");
    assert_eq!(user.name, "s1mple");
    assert!(!user.is_admin);
    assert_eq!(user.totals.matches, 0);
    assert_eq!(user.skill_rating, 1000);

    Ok(())
}

/// Tests a repeated login refreshes the profile without touching admin status.
///
/// Verifies that an upsert without `is_admin` keeps an existing admin flag while
/// name and avatar follow the latest Steam profile.
///
/// Expected: Ok with updated name, same id, admin kept
#[tokio::test]
async fn updates_profile_and_preserves_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = UserRepository::new(db);

    let created = repo
        .upsert(UpsertUserParam {
            steam_id: "76561198000000002".to_string(),
            name: "OldName".to_string(),
            avatar_url: None,
            is_admin: Some(true),
        })
        .await?;

    let updated = repo
        .upsert(UpsertUserParam {
            steam_id: "76561198000000002".to_string(),
            name: "NewName".to_string(),
            avatar_url: Some("https://avatars.example/new.jpg".to_string()),
            is_admin: None,
        })
        .await?;

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "NewName");
    assert_eq!(
        updated.avatar_url.as_deref(),
        Some("https://avatars.example/new.jpg")
    );
    assert!(updated.is_admin);

    let count = entity::prelude::User::find().all(db).await?.len();
    assert_eq!(count, 1);

    Ok(())
}
