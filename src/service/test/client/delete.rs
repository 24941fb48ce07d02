use super::*;
use sea_orm::{EntityTrait, PaginatorTrait};
use uuid::Uuid;

/// Tests that a deleted client disappears from reads.
///
/// Expected: Ok, then NotFound on fetch and an empty listing
#[tokio::test]
async fn hides_client_from_reads() -> Result<(), DbErr> {
    let test = test_db().await;
    let db = test.db.as_ref().unwrap();

    let created = factory::client::create_client(db).await?;
    let service = service(db);

    service.delete(created.id).await.unwrap();

    let err = service.get_by_id(created.id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let page = service.list(1, 16).await.unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.total_items, 0);

    Ok(())
}

/// Tests that deletion keeps the row in the table.
///
/// Expected: unfiltered count still 1 after delete
#[tokio::test]
async fn keeps_row_physically() -> Result<(), DbErr> {
    let test = test_db().await;
    let db = test.db.as_ref().unwrap();

    let created = factory::client::create_client(db).await?;
    service(db).delete(created.id).await.unwrap();

    assert_eq!(entity::prelude::Client::find().count(db).await?, 1);

    Ok(())
}

/// Tests that deleting the same client twice fails the second time.
///
/// Expected: Err(NotFound) on the repeated delete
#[tokio::test]
async fn rejects_repeated_delete() -> Result<(), DbErr> {
    let test = test_db().await;
    let db = test.db.as_ref().unwrap();

    let created = factory::client::create_client(db).await?;
    let service = service(db);

    service.delete(created.id).await.unwrap();
    let err = service.delete(created.id).await.unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));

    Ok(())
}

/// Tests deleting an unknown id.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn returns_not_found_for_missing_id() -> Result<(), DbErr> {
    let test = test_db().await;
    let db = test.db.as_ref().unwrap();

    let err = service(db).delete(Uuid::new_v4()).await.unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));

    Ok(())
}
