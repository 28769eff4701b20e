//! Paired writes of an entity and its owner link.
//!
//! Listings and bookings are each referenced from their owner's set through a link
//! row. Creating or deleting one of them always touches both rows, and
//! `LinkedWrite` performs both inside a single transaction that is committed only
//! when every step succeeded.

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, DatabaseTransaction, DbErr,
    DeleteMany, EntityTrait, IntoActiveModel, TransactionTrait,
};

pub struct LinkedWrite<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LinkedWrite<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts an entity and the link row built from it.
    ///
    /// The link builder sees the inserted model, so it can reference the generated ID.
    /// If the builder or either insert fails, the transaction is rolled back and
    /// neither row exists afterwards.
    ///
    /// # Arguments
    /// - `entity` - Active model of the entity to insert
    /// - `link` - Builds the link row from the inserted entity
    ///
    /// # Returns
    /// - `Ok(Model)` - The inserted entity, committed together with its link
    /// - `Err(DbErr)` - Any failure; nothing was written
    pub async fn create<A, L, F>(
        &self,
        entity: A,
        link: F,
    ) -> Result<<A::Entity as EntityTrait>::Model, DbErr>
    where
        A: ActiveModelTrait + ActiveModelBehavior + Send,
        <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
        L: ActiveModelTrait + ActiveModelBehavior + Send,
        <L::Entity as EntityTrait>::Model: IntoActiveModel<L>,
        F: FnOnce(&<A::Entity as EntityTrait>::Model) -> Result<L, DbErr>,
    {
        let txn = self.db.begin().await?;

        let result = async {
            let model = entity.insert(&txn).await?;
            link(&model)?.insert(&txn).await?;
            Ok::<_, DbErr>(model)
        }
        .await;

        finish(txn, result).await
    }

    /// Deletes a link row and the entity it points at.
    ///
    /// # Arguments
    /// - `unlink` - Delete statement for the owner link
    /// - `entity` - Delete statement for the entity itself
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of entity rows deleted, committed together with the unlink
    /// - `Err(DbErr)` - Any failure; nothing was deleted
    pub async fn delete<U, E>(
        &self,
        unlink: DeleteMany<U>,
        entity: DeleteMany<E>,
    ) -> Result<u64, DbErr>
    where
        U: EntityTrait,
        E: EntityTrait,
    {
        let txn = self.db.begin().await?;

        let result = async {
            unlink.exec(&txn).await?;
            let deleted = entity.exec(&txn).await?;
            Ok::<_, DbErr>(deleted.rows_affected)
        }
        .await;

        finish(txn, result).await
    }
}

/// Commits on success, rolls back on failure.
async fn finish<T>(txn: DatabaseTransaction, result: Result<T, DbErr>) -> Result<T, DbErr> {
    match result {
        Ok(value) => {
            txn.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = txn.rollback().await {
                tracing::error!("Failed to roll back linked write: {}", rollback_err);
            }
            Err(err)
        }
    }
}
