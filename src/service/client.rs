//! Client service for business logic.
//!
//! Orchestrates validation, repository access, and response mapping for the
//! client use cases. Every mutating use case validates first (aborting with
//! no partial persistence), checks existence immediately after lookup, and
//! pairs its staged mutations with a terminal commit.

use chrono::Utc;
use sea_orm::{ActiveValue, DatabaseConnection, IntoActiveModel};
use uuid::Uuid;

use crate::{
    data::client::ClientRepository,
    error::AppError,
    model::client::{ClientDto, CreateClientDto, PagedClientsDto, UpdateClientDto},
    validation::{validate_create_client, validate_update_client},
};

/// Page size applied when the requested one falls outside [1, 100].
pub const DEFAULT_PAGE_SIZE: u64 = 16;
const MAX_PAGE_SIZE: u64 = 100;

const CLIENT_NOT_FOUND: &str = "Client not found";

pub struct ClientService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> ClientService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new client record.
    ///
    /// The name is stored trimmed; the access counter starts at zero.
    ///
    /// # Returns
    /// - `Ok(ClientDto)` - Created client
    /// - `Err(AppError::Validation)` - Payload failed the create rule set
    /// - `Err(AppError::DbErr)` - Database error during insert or commit
    pub async fn create(&self, request: CreateClientDto) -> Result<ClientDto, AppError> {
        if let Err(errors) = validate_create_client(&request) {
            tracing::warn!("Validation failed creating client: {}", request.name);
            return Err(AppError::Validation(errors));
        }

        let now = Utc::now();
        let client = entity::client::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(request.name.trim().to_string()),
            salary: ActiveValue::Set(request.salary),
            company_value: ActiveValue::Set(request.company_value),
            access_count: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
        };

        let repo = ClientRepository::new(self.db);
        let mut uow = repo.begin().await?;
        let created = uow.add(client).await?;
        uow.commit().await?;

        tracing::info!("Client created. Id: {}, Name: {}", created.id, created.name);

        Ok(ClientDto::from_model(created))
    }

    /// Lists live clients, newest first, one page at a time.
    ///
    /// `page` values below 1 are treated as 1; `page_size` values outside
    /// [1, 100] fall back to the default of 16.
    pub async fn list(&self, page: i64, page_size: i64) -> Result<PagedClientsDto, AppError> {
        let page = if page < 1 { 1 } else { page as u64 };
        let page_size = if page_size < 1 || page_size > MAX_PAGE_SIZE as i64 {
            DEFAULT_PAGE_SIZE
        } else {
            page_size as u64
        };

        let repo = ClientRepository::new(self.db);
        let (items, total_items) = repo.list(page, page_size).await?;

        let total_pages = total_items.div_ceil(page_size);

        tracing::info!("Listed clients. Total: {}, Page: {}", total_items, page);

        Ok(PagedClientsDto {
            items: items.into_iter().map(ClientDto::from_model).collect(),
            page,
            page_size,
            total_items,
            total_pages,
        })
    }

    /// Fetches a single live client and counts the access.
    ///
    /// Every successful fetch increments the access counter by exactly one
    /// and refreshes `updated_at`, including repeated fetches of the same id.
    ///
    /// # Returns
    /// - `Ok(ClientDto)` - Client with the incremented access count
    /// - `Err(AppError::NotFound)` - No live client with that id
    /// - `Err(AppError::DbErr)` - Database error during fetch or commit
    pub async fn get_by_id(&self, id: Uuid) -> Result<ClientDto, AppError> {
        let repo = ClientRepository::new(self.db);

        let Some(client) = repo.get_by_id(id).await? else {
            tracing::warn!("Client not found. Id: {}", id);
            return Err(AppError::NotFound(CLIENT_NOT_FOUND.to_string()));
        };

        let access_count = client.access_count + 1;
        let mut active = client.into_active_model();
        active.access_count = ActiveValue::Set(access_count);
        active.updated_at = ActiveValue::Set(Utc::now());

        let mut uow = repo.begin().await?;
        let updated = uow.update(active).await?;
        uow.commit().await?;

        tracing::info!(
            "Client retrieved. Id: {}, Accesses: {}",
            updated.id,
            updated.access_count
        );

        Ok(ClientDto::from_model(updated))
    }

    /// Updates a live client's name, salary, and company value.
    ///
    /// # Returns
    /// - `Ok(ClientDto)` - Updated client
    /// - `Err(AppError::Validation)` - Payload failed the update rule set
    /// - `Err(AppError::NotFound)` - No live client with that id
    /// - `Err(AppError::DbErr)` - Database error during fetch or commit
    pub async fn update(&self, id: Uuid, request: UpdateClientDto) -> Result<ClientDto, AppError> {
        if let Err(errors) = validate_update_client(&request) {
            tracing::warn!("Validation failed updating client. Id: {}", id);
            return Err(AppError::Validation(errors));
        }

        let repo = ClientRepository::new(self.db);

        let Some(client) = repo.get_by_id(id).await? else {
            tracing::warn!("Client not found for update. Id: {}", id);
            return Err(AppError::NotFound(CLIENT_NOT_FOUND.to_string()));
        };

        let mut active = client.into_active_model();
        active.name = ActiveValue::Set(request.name.trim().to_string());
        active.salary = ActiveValue::Set(request.salary);
        active.company_value = ActiveValue::Set(request.company_value);
        active.updated_at = ActiveValue::Set(Utc::now());

        let mut uow = repo.begin().await?;
        let updated = uow.update(active).await?;
        uow.commit().await?;

        tracing::info!("Client updated. Id: {}, Name: {}", updated.id, updated.name);

        Ok(ClientDto::from_model(updated))
    }

    /// Soft deletes a live client.
    ///
    /// Sets `deleted_at` and `updated_at`; the row is never physically
    /// removed but stops existing for every read, list, and update path.
    ///
    /// # Returns
    /// - `Ok(())` - Client marked deleted
    /// - `Err(AppError::NotFound)` - No live client with that id
    /// - `Err(AppError::DbErr)` - Database error during fetch or commit
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let repo = ClientRepository::new(self.db);

        let Some(client) = repo.get_by_id(id).await? else {
            tracing::warn!("Client not found for deletion. Id: {}", id);
            return Err(AppError::NotFound(CLIENT_NOT_FOUND.to_string()));
        };

        let now = Utc::now();
        let mut active = client.into_active_model();
        active.deleted_at = ActiveValue::Set(Some(now));
        active.updated_at = ActiveValue::Set(now);

        let mut uow = repo.begin().await?;
        uow.soft_delete(active).await?;
        uow.commit().await?;

        tracing::info!("Client soft deleted. Id: {}", id);

        Ok(())
    }
}
