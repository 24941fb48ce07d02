use super::*;
use chrono::{Duration, Utc};

/// Tests that listing orders clients by creation time descending.
///
/// Expected: Ok with newest client first
#[tokio::test]
async fn orders_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let base = Utc::now();
    let oldest = factory::client::ClientFactory::new(db)
        .created_at(base - Duration::hours(2))
        .build()
        .await?;
    let middle = factory::client::ClientFactory::new(db)
        .created_at(base - Duration::hours(1))
        .build()
        .await?;
    let newest = factory::client::ClientFactory::new(db)
        .created_at(base)
        .build()
        .await?;

    let repo = ClientRepository::new(db);
    let (items, total) = repo.list(1, 10).await?;

    assert_eq!(total, 3);
    let ids: Vec<_> = items.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![newest.id, middle.id, oldest.id]);

    Ok(())
}

/// Tests that soft-deleted clients appear in neither the page nor the total.
///
/// Expected: Ok with only live clients counted and returned
#[tokio::test]
async fn excludes_soft_deleted_clients() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let live = factory::client::create_client(db).await?;
    factory::client::ClientFactory::new(db)
        .deleted()
        .build()
        .await?;

    let repo = ClientRepository::new(db);
    let (items, total) = repo.list(1, 10).await?;

    assert_eq!(total, 1);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, live.id);

    Ok(())
}

/// Tests that consecutive pages partition the live records.
///
/// Concatenating all pages in order must reproduce every live record exactly
/// once, ordered by creation time descending, while the total stays
/// independent of the window.
///
/// Expected: Ok with 5 records split 2 + 2 + 1
#[tokio::test]
async fn pages_partition_live_records() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let base = Utc::now();
    let mut expected = Vec::new();
    for i in 0..5 {
        let client = factory::client::ClientFactory::new(db)
            .created_at(base - Duration::minutes(i))
            .build()
            .await?;
        expected.push(client.id);
    }

    let repo = ClientRepository::new(db);
    let mut collected = Vec::new();
    for page in 1..=3 {
        let (items, total) = repo.list(page, 2).await?;
        assert_eq!(total, 5);
        collected.extend(items.into_iter().map(|c| c.id));
    }

    assert_eq!(collected, expected);

    Ok(())
}

/// Tests that pagination is stable when creation times collide.
///
/// Ordering falls back to the id, so repeated calls must return identical
/// windows.
///
/// Expected: Ok with the same page content on every call
#[tokio::test]
async fn breaks_created_at_ties_deterministically() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let same_instant = Utc::now();
    for _ in 0..4 {
        factory::client::ClientFactory::new(db)
            .created_at(same_instant)
            .build()
            .await?;
    }

    let repo = ClientRepository::new(db);
    let (first_call, _) = repo.list(1, 2).await?;
    let (second_call, _) = repo.list(1, 2).await?;

    assert_eq!(first_call, second_call);

    Ok(())
}

/// Tests that a page past the end of the data is empty but keeps the total.
///
/// Expected: Ok with no items and the full live count
#[tokio::test]
async fn returns_empty_page_past_the_end() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::client::create_client(db).await?;

    let repo = ClientRepository::new(db);
    let (items, total) = repo.list(5, 10).await?;

    assert!(items.is_empty());
    assert_eq!(total, 1);

    Ok(())
}
