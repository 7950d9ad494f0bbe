use super::*;

/// Tests deleting a generated month.
///
/// Expected: Ok, the month is empty afterwards and a second delete is NotFound
#[tokio::test]
async fn deletes_snapshot_once() -> Result<(), AppError> {
    let test = ranking_builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    UserFactory::new(db).totals(3, 45).build().await?;
    let service = RankingService::new(db);
    service.generate("2030-04").await?;

    service.delete_month("2030-04").await?;

    assert!(service.get_by_month("2030-04").await?.is_empty());
    assert!(matches!(
        service.delete_month("2030-04").await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
