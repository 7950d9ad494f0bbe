use super::*;

fn param(external_match_id: &str, map_number: i32) -> CreateMatchParam {
    CreateMatchParam {
        external_match_id: external_match_id.to_string(),
        map_number,
        map: "de_mirage".to_string(),
        team1_name: "CT".to_string(),
        team2_name: "TERRORIST".to_string(),
        team1_score: 13,
        team2_score: 9,
        winner_team: Some("CT".to_string()),
    }
}

/// Tests a created match can be found again by its import identity.
///
/// Expected: Ok with the same match from `find_by_identity`
#[tokio::test]
async fn creates_and_finds_by_identity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Match)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = MatchRepository::new(db);

    let created = repo.create(param("1042", 0)).await?;
    let found = repo.find_by_identity("1042", 0).await?;

    assert_eq!(found.map(|m| m.id), Some(created.id));
    assert!(repo.find_by_identity("1042", 1).await?.is_none());

    Ok(())
}

/// Tests the unique index rejects a second match with the same identity.
///
/// Expected: Err recognised as a unique violation
#[tokio::test]
async fn rejects_duplicate_identity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Match)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = MatchRepository::new(db);

    repo.create(param("2001", 1)).await?;
    let result = repo.create(param("2001", 1)).await;

    let err = result.unwrap_err();
    assert!(is_unique_violation(&err));

    Ok(())
}

/// Tests deleting a match.
///
/// Expected: true once, false for the second attempt
#[tokio::test]
async fn deletes_match() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Match)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_match(db).await?;
    let repo = MatchRepository::new(db);

    assert!(repo.delete(game.id).await?);
    assert!(!repo.delete(game.id).await?);
    assert!(repo.find_by_id(game.id).await?.is_none());

    Ok(())
}
