//! PostgreSQL 事务管理模块

use sqlx::{PgPool, Postgres, Transaction};
use tracing::warn;
use vendorhub_errors::{AppError, AppResult};

/// 事务管理器
#[derive(Clone)]
pub struct TransactionManager {
    pool: PgPool,
}

impl TransactionManager {
    /// 创建新的事务管理器
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 开始事务
    pub async fn begin(&self) -> AppResult<Transaction<'static, Postgres>> {
        self.pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin transaction: {}", e)))
    }

    /// 提交事务
    pub async fn commit(tx: Transaction<'static, Postgres>) -> AppResult<()> {
        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit transaction: {}", e)))
    }

    /// 回滚事务（失败仅记录日志）
    pub async fn rollback(tx: Transaction<'static, Postgres>) {
        if let Err(e) = tx.rollback().await {
            warn!(error = %e, "Failed to rollback transaction");
        }
    }
}
