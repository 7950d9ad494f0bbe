use super::*;

/// Tests matches are listed newest first.
///
/// Expected: Ok with the latest match on the first page
#[tokio::test]
async fn lists_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Match)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut created = Vec::new();
    for _ in 0..3 {
        created.push(factory::create_match(db).await?);
    }

    let page = MatchRepository::new(db).get_paginated(0, 2).await?;

    assert_eq!(page.total, 3);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.matches.len(), 2);
    assert_eq!(page.matches[0].id, created[2].id);

    Ok(())
}
