use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

pub struct ClientRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClientRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the live client with the given id.
    ///
    /// Soft-deleted rows are invisible here: a deleted id behaves exactly
    /// like a missing one.
    pub async fn get_by_id(
        &self,
        id: uuid::Uuid,
    ) -> Result<Option<entity::client::Model>, DbErr> {
        entity::prelude::Client::find()
            .filter(entity::client::Column::Id.eq(id))
            .filter(entity::client::Column::DeletedAt.is_null())
            .one(self.db)
            .await
    }

    /// Gets one page of live clients plus the total live count.
    ///
    /// Ordered by creation time descending with id as a deterministic
    /// tie-break so pagination stays stable across calls. `page` is
    /// 1-based; the total is independent of the window.
    pub async fn list(
        &self,
        page: u64,
        page_size: u64,
    ) -> Result<(Vec<entity::client::Model>, u64), DbErr> {
        let paginator = entity::prelude::Client::find()
            .filter(entity::client::Column::DeletedAt.is_null())
            .order_by_desc(entity::client::Column::CreatedAt)
            .order_by_desc(entity::client::Column::Id)
            .paginate(self.db, page_size);

        let total = paginator.num_items().await?;
        let clients = paginator.fetch_page(page.saturating_sub(1)).await?;

        Ok((clients, total))
    }

    /// Opens a unit of work for staging mutations.
    pub async fn begin(&self) -> Result<ClientUnitOfWork, DbErr> {
        Ok(ClientUnitOfWork {
            txn: self.db.begin().await?,
            staged: 0,
        })
    }
}

/// A batch of staged client mutations flushed atomically by `commit`.
///
/// Mutations execute inside a database transaction, so nothing is visible to
/// other connections until `commit` is called; dropping the unit uncommitted
/// rolls every staged change back. A caller must always pair its mutations
/// with a terminal `commit` in the same unit of work.
pub struct ClientUnitOfWork {
    txn: DatabaseTransaction,
    staged: u64,
}

impl ClientUnitOfWork {
    /// Stages a new client record for persistence.
    pub async fn add(
        &mut self,
        client: entity::client::ActiveModel,
    ) -> Result<entity::client::Model, DbErr> {
        let model = client.insert(&self.txn).await?;
        self.staged += 1;
        Ok(model)
    }

    /// Stages an existing client's mutated fields for persistence.
    pub async fn update(
        &mut self,
        client: entity::client::ActiveModel,
    ) -> Result<entity::client::Model, DbErr> {
        let model = client.update(&self.txn).await?;
        self.staged += 1;
        Ok(model)
    }

    /// Stages a soft delete.
    ///
    /// The caller has already set `deleted_at` (and `updated_at`) on the
    /// record; persistence-wise this is an update, never a physical delete.
    pub async fn soft_delete(
        &mut self,
        client: entity::client::ActiveModel,
    ) -> Result<entity::client::Model, DbErr> {
        self.update(client).await
    }

    /// Flushes all staged changes atomically.
    ///
    /// Returns the number of rows affected by the unit of work.
    pub async fn commit(self) -> Result<u64, DbErr> {
        self.txn.commit().await?;
        Ok(self.staged)
    }
}
