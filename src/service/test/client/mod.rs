use crate::{
    error::AppError,
    model::client::{CreateClientDto, UpdateClientDto},
    service::client::ClientService,
};
use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, DbErr};
use test_utils::{builder::TestBuilder, context::TestContext, factory};

mod delete;
mod update;

async fn test_db() -> TestContext {
    TestBuilder::new()
        .with_table(entity::prelude::Client)
        .build()
        .await
        .unwrap()
}

fn create_request(name: &str) -> CreateClientDto {
    CreateClientDto {
        name: name.to_string(),
        salary: Decimal::new(500000, 2),
        company_value: Decimal::new(10000000, 2),
    }
}

fn update_request(name: &str) -> UpdateClientDto {
    UpdateClientDto {
        name: name.to_string(),
        salary: Decimal::new(600000, 2),
        company_value: Decimal::new(20000000, 2),
    }
}

fn service(db: &DatabaseConnection) -> ClientService<'_> {
    ClientService::new(db)
}
