use super::*;

/// Tests a month's snapshot is written, read back in order and deleted.
///
/// Expected: rows ordered by position, other months untouched by deletion
#[tokio::test]
async fn writes_reads_and_deletes_month() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::user::UserFactory::new(db).name("a").build().await?;
    let b = factory::user::UserFactory::new(db).name("b").build().await?;
    let repo = RankingRepository::new(db);

    let entry = |user_id, position, skill_rating| RankingEntryParam {
        user_id,
        position,
        skill_rating,
        matches: 4,
        kills: 80,
    };

    repo.create_many("2030-05", vec![entry(b.id, 2, 1200), entry(a.id, 1, 1300)])
        .await?;
    repo.create_many("2030-04", vec![entry(a.id, 1, 1250)])
        .await?;

    let may = repo.get_by_month("2030-05").await?;
    assert_eq!(may.len(), 2);
    assert_eq!(may[0].user_name.as_deref(), Some("a"));
    assert_eq!(may[1].position, 2);

    assert_eq!(repo.delete_month("2030-05").await?, 2);
    assert!(repo.get_by_month("2030-05").await?.is_empty());
    assert_eq!(repo.get_by_month("2030-04").await?.len(), 1);

    Ok(())
}
