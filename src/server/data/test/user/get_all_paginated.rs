use super::*;

/// Tests users come back ordered by skill rating, highest first.
///
/// Expected: Ok with pages in rating order and accurate totals
#[tokio::test]
async fn orders_by_skill_rating() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for rating in [1100, 1400, 1000, 1250, 1320] {
        factory::user::UserFactory::new(db)
            .skill_rating(rating)
            .build()
            .await?;
    }

    let repo = UserRepository::new(db);
    let first = repo.get_all_paginated(0, 2).await?;

    assert_eq!(first.total, 5);
    assert_eq!(first.total_pages, 3);
    let ratings: Vec<i32> = first.users.iter().map(|u| u.skill_rating).collect();
    assert_eq!(ratings, vec![1400, 1320]);

    let last = repo.get_all_paginated(2, 2).await?;
    assert_eq!(last.users.len(), 1);
    assert_eq!(last.users[0].skill_rating, 1000);

    Ok(())
}

/// Tests pagination with an empty table.
///
/// Expected: Ok with no users and zero totals
#[tokio::test]
async fn returns_empty_for_no_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let page = UserRepository::new(db).get_all_paginated(0, 20).await?;

    assert!(page.users.is_empty());
    assert_eq!(page.total, 0);
    assert_eq!(page.total_pages, 0);

    Ok(())
}
