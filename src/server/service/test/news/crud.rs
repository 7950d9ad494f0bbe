use super::*;

/// Tests creating a post and reading it back.
///
/// Expected: author name resolved and markdown rendered in the DTO
#[tokio::test]
async fn create_and_get() -> Result<(), AppError> {
    let test = news_builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::user::UserFactory::new(db)
        .name("Organizer")
        .admin(true)
        .build()
        .await?;
    let service = NewsService::new(db);

    let created = service
        .create(CreateNewsParam {
            author_id: admin.id,
            title: "Season opener".to_string(),
            content: "Mix starts **Friday**".to_string(),
        })
        .await?;
    let news = service.get_by_id(created.id).await?;

    assert_eq!(news.author_name.as_deref(), Some("Organizer"));
    assert!(news.into_dto().html.contains("<strong>Friday</strong>"));

    Ok(())
}

/// Tests creating a post without a title.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_empty_title() -> Result<(), AppError> {
    let test = news_builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::create_admin(db).await?;

    let result = NewsService::new(db)
        .create(CreateNewsParam {
            author_id: admin.id,
            title: String::new(),
            content: "body".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests a partial update followed by deletion.
///
/// Expected: only the title changes; after deletion get and delete are NotFound
#[tokio::test]
async fn update_then_delete() -> Result<(), AppError> {
    let test = news_builder().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::create_admin(db).await?;
    let service = NewsService::new(db);
    let created = service
        .create(CreateNewsParam {
            author_id: admin.id,
            title: "Draft".to_string(),
            content: "unchanged".to_string(),
        })
        .await?;

    let updated = service
        .update(
            created.id,
            UpdateNewsParam {
                title: Some("Final".to_string()),
                content: None,
            },
        )
        .await?;
    assert_eq!(updated.title, "Final");
    assert_eq!(updated.content, "unchanged");

    service.delete(created.id).await?;
    assert!(matches!(
        service.get_by_id(created.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.delete(created.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
