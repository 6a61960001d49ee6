//! vendors 表结构

use sqlx::PgPool;
use vendorhub_adapter_postgres::{SchemaStatement, apply_schema};
use vendorhub_errors::AppResult;

/// 服务启动和维护工具运行前执行的 DDL
pub const VENDOR_SCHEMA: &[SchemaStatement] = &[
    SchemaStatement::new(
        "create_vendors",
        r#"
        CREATE TABLE IF NOT EXISTS vendors (
            id                    UUID PRIMARY KEY,
            name                  TEXT NOT NULL,
            category              TEXT,
            logo_url              TEXT,
            owner_name            TEXT,
            owner_avatar_url      TEXT,
            department            TEXT,
            vendor_owner_location TEXT,
            spend_365d            NUMERIC(12, 2) NOT NULL DEFAULT 0,
            spend_30d             NUMERIC(12, 2) NOT NULL DEFAULT 0,
            payment_type          TEXT NOT NULL,
            status                TEXT NOT NULL,
            description           TEXT,
            has_contract          BOOLEAN NOT NULL DEFAULT FALSE,
            is_1099_vendor        BOOLEAN NOT NULL DEFAULT FALSE,
            created_at            TIMESTAMPTZ NOT NULL DEFAULT now(),
            updated_at            TIMESTAMPTZ
        )
        "#,
    ),
    SchemaStatement::new(
        "vendors_name_key",
        "CREATE UNIQUE INDEX IF NOT EXISTS vendors_name_key ON vendors (name)",
    ),
    SchemaStatement::new(
        "vendors_created_at_idx",
        "CREATE INDEX IF NOT EXISTS vendors_created_at_idx ON vendors (created_at)",
    ),
];

/// 确保 vendors 表及索引存在
pub async fn ensure_schema(pool: &PgPool) -> AppResult<()> {
    apply_schema(pool, VENDOR_SCHEMA).await
}
