//! Client factory for creating test client entities.
//!
//! This module provides factory methods for creating client records with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test clients with customizable fields.
///
/// Provides a builder pattern for creating client entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::client::ClientFactory;
///
/// let client = ClientFactory::new(&db)
///     .name("Acme Corp")
///     .salary(Decimal::new(750000, 2))
///     .deleted()
///     .build()
///     .await?;
/// ```
pub struct ClientFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    salary: Decimal,
    company_value: Decimal,
    access_count: i32,
    created_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl<'a> ClientFactory<'a> {
    /// Creates a new ClientFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Client {id}"` where id is auto-incremented
    /// - salary: `5000.00`
    /// - company_value: `100000.00`
    /// - access_count: `0`
    /// - created_at: now
    /// - deleted_at: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Client {}", id),
            salary: Decimal::new(500000, 2),
            company_value: Decimal::new(10000000, 2),
            access_count: 0,
            created_at: Utc::now(),
            deleted_at: None,
        }
    }

    /// Sets the client name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the client salary.
    pub fn salary(mut self, salary: Decimal) -> Self {
        self.salary = salary;
        self
    }

    /// Sets the client company value.
    pub fn company_value(mut self, company_value: Decimal) -> Self {
        self.company_value = company_value;
        self
    }

    /// Sets the access counter.
    pub fn access_count(mut self, access_count: i32) -> Self {
        self.access_count = access_count;
        self
    }

    /// Sets the creation timestamp.
    ///
    /// Useful for pagination tests that need a deterministic ordering by
    /// `created_at`.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Marks the client as soft deleted at the current time.
    pub fn deleted(mut self) -> Self {
        self.deleted_at = Some(Utc::now());
        self
    }

    /// Builds and inserts the client entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::client::Model)` - Created client entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::client::Model, DbErr> {
        entity::client::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(self.name),
            salary: ActiveValue::Set(self.salary),
            company_value: ActiveValue::Set(self.company_value),
            access_count: ActiveValue::Set(self.access_count),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            deleted_at: ActiveValue::Set(self.deleted_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a client with default values.
///
/// Shorthand for `ClientFactory::new(db).build().await`.
pub async fn create_client(db: &DatabaseConnection) -> Result<entity::client::Model, DbErr> {
    ClientFactory::new(db).build().await
}
