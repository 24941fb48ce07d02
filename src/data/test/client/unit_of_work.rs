use super::*;
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ActiveValue, EntityTrait, IntoActiveModel, PaginatorTrait};
use uuid::Uuid;

fn new_client() -> entity::client::ActiveModel {
    let now = Utc::now();
    entity::client::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        name: ActiveValue::Set("Acme Corp".to_string()),
        salary: ActiveValue::Set(Decimal::new(500000, 2)),
        company_value: ActiveValue::Set(Decimal::new(10000000, 2)),
        access_count: ActiveValue::Set(0),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        deleted_at: ActiveValue::Set(None),
    }
}

/// Tests that committing a staged insert persists it and reports one
/// affected row.
///
/// Expected: Ok(1) and the record visible afterwards
#[tokio::test]
async fn commit_flushes_staged_add() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClientRepository::new(db);

    let mut uow = repo.begin().await?;
    let created = uow.add(new_client()).await?;
    let affected = uow.commit().await?;

    assert_eq!(affected, 1);
    assert!(repo.get_by_id(created.id).await?.is_some());

    Ok(())
}

/// Tests that the affected-row count covers every staged mutation in the
/// unit of work.
///
/// Expected: Ok(2) for an add plus an update
#[tokio::test]
async fn commit_counts_all_staged_mutations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClientRepository::new(db);

    let mut uow = repo.begin().await?;
    let created = uow.add(new_client()).await?;

    let mut active = created.into_active_model();
    active.name = ActiveValue::Set("Renamed Corp".to_string());
    uow.update(active).await?;

    let affected = uow.commit().await?;
    assert_eq!(affected, 2);

    Ok(())
}

/// Tests that dropping a unit of work without committing rolls everything
/// back.
///
/// Staged mutations must be a no-op until commit.
///
/// Expected: record absent after the drop
#[tokio::test]
async fn drop_without_commit_rolls_back() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClientRepository::new(db);

    let id = {
        let mut uow = repo.begin().await?;
        let created = uow.add(new_client()).await?;
        created.id
        // uow dropped here without commit
    };

    assert!(repo.get_by_id(id).await?.is_none());
    assert_eq!(entity::prelude::Client::find().count(db).await?, 0);

    Ok(())
}

/// Tests that a committed soft delete keeps the row physically present.
///
/// The record must disappear from repository reads while remaining in the
/// table.
///
/// Expected: invisible to get_by_id, still counted by an unfiltered query
#[tokio::test]
async fn soft_delete_keeps_row_in_table() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Client)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::client::create_client(db).await?;
    let repo = ClientRepository::new(db);

    let mut active = client.clone().into_active_model();
    active.deleted_at = ActiveValue::Set(Some(Utc::now()));

    let mut uow = repo.begin().await?;
    uow.soft_delete(active).await?;
    uow.commit().await?;

    assert!(repo.get_by_id(client.id).await?.is_none());
    assert_eq!(entity::prelude::Client::find().count(db).await?, 1);

    Ok(())
}
