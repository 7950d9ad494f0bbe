use super::*;

/// Tests filing a report against another player.
///
/// Expected: Ok with an open report
#[tokio::test]
async fn files_open_report() -> Result<(), AppError> {
    let test = report_builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let reporter = factory::create_user(db).await?;
    let reported = factory::create_user(db).await?;

    let report = ReportService::new(db)
        .create(param(reporter.id, Some(reported.id)))
        .await?;

    assert_eq!(report.reporter_id, reporter.id);
    assert_eq!(report.reported_user_id, Some(reported.id));
    assert_eq!(report.status, ReportStatus::Open);

    Ok(())
}

/// Tests reporting yourself.
///
/// Expected: Err(BadRequest) and nothing stored
#[tokio::test]
async fn rejects_self_report() -> Result<(), AppError> {
    let test = report_builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let reporter = factory::create_user(db).await?;
    let service = ReportService::new(db);

    let result = service.create(param(reporter.id, Some(reporter.id))).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(service.get_all().await?.is_empty());

    Ok(())
}

/// Tests a report without a reason.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_empty_reason() -> Result<(), AppError> {
    let test = report_builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let reporter = factory::create_user(db).await?;

    let mut empty = param(reporter.id, None);
    empty.reason = String::new();
    let result = ReportService::new(db).create(empty).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests resolving and deleting a report.
///
/// Expected: status updated, then NotFound for both calls once deleted
#[tokio::test]
async fn resolve_then_delete() -> Result<(), AppError> {
    let test = report_builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let reporter = factory::create_user(db).await?;
    let service = ReportService::new(db);
    let report = service.create(param(reporter.id, None)).await?;

    let resolved = service
        .update_status(report.id, ReportStatus::Resolved)
        .await?;
    assert_eq!(resolved.status, ReportStatus::Resolved);

    service.delete(report.id).await?;
    assert!(matches!(
        service.delete(report.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.update_status(report.id, ReportStatus::Dismissed).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
