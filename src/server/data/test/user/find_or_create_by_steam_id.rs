use super::*;

/// Tests an unknown SteamID creates a user named after the CSV row.
///
/// Expected: Ok with a new user
#[tokio::test]
async fn creates_unknown_player() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserRepository::new(db)
        .find_or_create_by_steam_id("76561198000000010", "ZywOo")
        .await?;

    assert_eq!(user.steam_id, "76561198000000010");
    assert_eq!(user.name, "ZywOo");
    assert_eq!(user.total_matches, 0);

    Ok(())
}

/// Tests a known SteamID returns the existing user and keeps their name.
///
/// Expected: Ok with the existing user, no new row
#[tokio::test]
async fn returns_existing_player() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::user::UserFactory::new(db)
        .steam_id("76561198000000011")
        .name("Registered")
        .build()
        .await?;

    let user = UserRepository::new(db)
        .find_or_create_by_steam_id("76561198000000011", "CsvName")
        .await?;

    assert_eq!(user.id, existing.id);
    assert_eq!(user.name, "Registered");
    assert_eq!(entity::prelude::User::find().all(db).await?.len(), 1);

    Ok(())
}
