use super::*;

/// Tests a snapshot over players with and without matches.
///
/// Expected: players with matches ranked by rating, players without matches left out
#[tokio::test]
async fn ranks_active_players_by_rating() -> Result<(), AppError> {
    let test = ranking_builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let second = UserFactory::new(db)
        .skill_rating(1200)
        .totals(4, 60)
        .build()
        .await?;
    let first = UserFactory::new(db)
        .skill_rating(1500)
        .totals(6, 110)
        .build()
        .await?;
    UserFactory::new(db).skill_rating(9000).build().await?;

    let ranking = RankingService::new(db).generate("2030-04").await?;

    let order: Vec<(i32, i32)> = ranking.iter().map(|r| (r.position, r.user_id)).collect();
    assert_eq!(order, vec![(1, first.id), (2, second.id)]);
    assert_eq!(ranking[0].month, "2030-04");
    assert_eq!(ranking[0].kills, 110);

    Ok(())
}

/// Tests regenerating a month after ratings changed.
///
/// Expected: the earlier snapshot is replaced, not appended to
#[tokio::test]
async fn replaces_existing_snapshot() -> Result<(), AppError> {
    let test = ranking_builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    UserFactory::new(db).totals(1, 10).build().await?;
    let service = RankingService::new(db);

    service.generate("2030-04").await?;
    UserFactory::new(db).totals(2, 30).build().await?;
    let ranking = service.generate("2030-04").await?;

    assert_eq!(ranking.len(), 2);
    assert_eq!(service.get_by_month("2030-04").await?.len(), 2);

    Ok(())
}

/// Tests a malformed month.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_malformed_month() -> Result<(), AppError> {
    let test = ranking_builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = RankingService::new(db).generate("2030-13").await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
