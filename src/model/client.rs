use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateClientDto {
    pub name: String,
    pub salary: Decimal,
    pub company_value: Decimal,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClientDto {
    pub name: String,
    pub salary: Decimal,
    pub company_value: Decimal,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientDto {
    pub id: Uuid,
    pub name: String,
    pub salary: Decimal,
    pub company_value: Decimal,
    pub access_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ClientDto {
    /// Projects an entity model onto the wire shape. `deleted_at` stays
    /// server-side.
    pub fn from_model(model: entity::client::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            salary: model.salary,
            company_value: model.company_value,
            access_count: model.access_count,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// One window of clients plus the metadata the front end needs for
/// navigation.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PagedClientsDto {
    pub items: Vec<ClientDto>,
    pub page: u64,
    pub page_size: u64,
    pub total_items: u64,
    pub total_pages: u64,
}
