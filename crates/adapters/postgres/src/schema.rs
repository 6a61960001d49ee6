//! PostgreSQL schema 初始化
//!
//! 启动时以单个事务执行幂等 DDL（`CREATE ... IF NOT EXISTS`），不维护版本历史

use sqlx::PgPool;
use tracing::info;
use vendorhub_errors::{AppError, AppResult};

/// 一条 schema 语句
#[derive(Debug, Clone, Copy)]
pub struct SchemaStatement {
    /// 名称（用于日志）
    pub name: &'static str,
    /// 幂等 DDL
    pub sql: &'static str,
}

impl SchemaStatement {
    pub const fn new(name: &'static str, sql: &'static str) -> Self {
        Self { name, sql }
    }
}

/// 在同一事务中依次执行所有 schema 语句，任一失败则整体回滚
pub async fn apply_schema(pool: &PgPool, statements: &[SchemaStatement]) -> AppResult<()> {
    let mut tx = pool
        .begin()
        .await
        .map_err(|e| AppError::database(format!("Failed to begin transaction: {}", e)))?;

    for statement in statements {
        sqlx::query(statement.sql)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::database(format!(
                    "Failed to apply schema statement {}: {}",
                    statement.name, e
                ))
            })?;
    }

    tx.commit()
        .await
        .map_err(|e| AppError::database(format!("Failed to commit schema: {}", e)))?;

    info!(statements = statements.len(), "Schema ensured");
    Ok(())
}
