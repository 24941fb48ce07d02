use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Client::Table)
                    .if_not_exists()
                    .col(pk_uuid(Client::Id))
                    .col(string_len(Client::Name, 150))
                    .col(decimal_len(Client::Salary, 18, 2))
                    .col(decimal_len(Client::CompanyValue, 18, 2))
                    .col(integer(Client::AccessCount).default(0))
                    .col(timestamp_with_time_zone(Client::CreatedAt))
                    .col(timestamp_with_time_zone(Client::UpdatedAt))
                    .col(timestamp_with_time_zone_null(Client::DeletedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_clients_name")
                    .table(Client::Table)
                    .col(Client::Name)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_clients_deleted_at")
                    .table(Client::Table)
                    .col(Client::DeletedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Client::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Client {
    #[sea_orm(iden = "clients")]
    Table,
    Id,
    Name,
    Salary,
    CompanyValue,
    AccessCount,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
