use super::*;
use uuid::Uuid;

/// Tests updating a client's fields.
///
/// Verifies the new name (trimmed), salary, and company value are stored and
/// the update timestamp is refreshed while creation time and access count
/// stay untouched.
///
/// Expected: Ok with overwritten fields
#[tokio::test]
async fn overwrites_fields_and_refreshes_updated_at() -> Result<(), DbErr> {
    let test = test_db().await;
    let db = test.db.as_ref().unwrap();

    let created = factory::client::create_client(db).await?;

    let updated = service(db)
        .update(created.id, update_request("  Jane Doe  "))
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Jane Doe");
    assert_eq!(updated.salary, Decimal::new(600000, 2));
    assert_eq!(updated.company_value, Decimal::new(20000000, 2));
    assert_eq!(updated.access_count, created.access_count);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);

    Ok(())
}

/// Tests that update enforces the stricter three-character name minimum.
///
/// Expected: Err(Validation) with a name error, record unchanged
#[tokio::test]
async fn rejects_short_name_without_persisting() -> Result<(), DbErr> {
    let test = test_db().await;
    let db = test.db.as_ref().unwrap();

    let created = factory::client::create_client(db).await?;
    let original_name = created.name.clone();

    let err = service(db)
        .update(created.id, update_request("Al"))
        .await
        .unwrap_err();

    match err {
        AppError::Validation(errors) => assert!(errors.contains_key("name")),
        other => panic!("expected validation error, got {:?}", other),
    }

    let untouched = crate::data::client::ClientRepository::new(db)
        .get_by_id(created.id)
        .await?
        .unwrap();
    assert_eq!(untouched.name, original_name);

    Ok(())
}

/// Tests updating an unknown id.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn returns_not_found_for_missing_id() -> Result<(), DbErr> {
    let test = test_db().await;
    let db = test.db.as_ref().unwrap();

    let err = service(db)
        .update(Uuid::new_v4(), update_request("Jane Doe"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));

    Ok(())
}

/// Tests that a soft-deleted client cannot be updated.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn returns_not_found_for_soft_deleted_client() -> Result<(), DbErr> {
    let test = test_db().await;
    let db = test.db.as_ref().unwrap();

    let deleted = factory::client::ClientFactory::new(db)
        .deleted()
        .build()
        .await?;

    let err = service(db)
        .update(deleted.id, update_request("Jane Doe"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));

    Ok(())
}
