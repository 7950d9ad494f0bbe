use super::*;

/// Tests one row is written per player with all counters.
///
/// Expected: Ok with rows in insertion order and names attached
#[tokio::test]
async fn inserts_rows_with_names() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_match_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let game = factory::create_match(db).await?;
    let a = factory::user::UserFactory::new(db).name("alpha").build().await?;
    let b = factory::user::UserFactory::new(db).name("bravo").build().await?;

    let repo = MatchStatsRepository::new(db);
    repo.create_many(
        game.id,
        vec![
            CreateMatchStatsParam {
                user_id: a.id,
                team: "CT".to_string(),
                line: StatLine {
                    kills: 24,
                    deaths: 12,
                    v1_wins: 2,
                    shots_fired: 410,
                    ..Default::default()
                },
                is_mvp: true,
            },
            CreateMatchStatsParam {
                user_id: b.id,
                team: "TERRORIST".to_string(),
                line: StatLine {
                    kills: 9,
                    deaths: 18,
                    ..Default::default()
                },
                is_mvp: false,
            },
        ],
    )
    .await?;

    let rows = repo.get_by_match(game.id).await?;

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].player_name.as_deref(), Some("alpha"));
    assert_eq!(rows[0].line.kills, 24);
    assert_eq!(rows[0].line.v1_wins, 2);
    assert_eq!(rows[0].line.shots_fired, 410);
    assert!(rows[0].is_mvp);
    assert_eq!(rows[1].team, "TERRORIST");
    assert!(!rows[1].is_mvp);

    Ok(())
}
