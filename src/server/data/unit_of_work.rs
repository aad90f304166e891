use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait};

/// One request's transaction.
///
/// Begun at the start of a handler and committed only once the whole operation has
/// succeeded. Dropping an uncommitted unit of work (an early `?` return or a panic)
/// rolls the transaction back.
pub struct UnitOfWork {
    txn: DatabaseTransaction,
}

impl UnitOfWork {
    pub async fn begin(db: &DatabaseConnection) -> Result<Self, DbErr> {
        let txn = db.begin().await?;

        Ok(Self { txn })
    }

    /// Connection that repositories and backends should use for this unit of work.
    pub fn connection(&self) -> &DatabaseTransaction {
        &self.txn
    }

    pub async fn commit(self) -> Result<(), DbErr> {
        self.txn.commit().await
    }

    pub async fn rollback(self) -> Result<(), DbErr> {
        self.txn.rollback().await
    }
}
