//! PostgreSQL repository implementation

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool, Postgres, QueryBuilder};
use vendorhub_adapter_postgres::{TransactionManager, is_unique_violation};
use vendorhub_errors::{AppError, AppResult};
use vendorhub_telemetry::QueryTimer;

use crate::domain::entities::{DUPLICATE_NAME_MESSAGE, LogoAssignment, NewVendor, Vendor};
use crate::domain::listing::VendorListing;
use crate::domain::repositories::VendorRepository;

use super::converters::vendor_from_row;
use super::rows::{VENDOR_COLUMNS, VendorRow};

pub struct PostgresVendorRepository {
    pool: PgPool,
    tx_manager: TransactionManager,
}

impl PostgresVendorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self {
            tx_manager: TransactionManager::new(pool.clone()),
            pool,
        }
    }
}

/// 转义 LIKE 通配符，使搜索文本按字面匹配（配合 `ESCAPE '\'`）
pub fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// 构建列表查询
///
/// 搜索文本始终作为绑定参数；ORDER BY 的列名和方向只来自枚举白名单。
fn build_list_query(listing: &VendorListing) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(format!("SELECT {} FROM vendors", VENDOR_COLUMNS));

    if let Some(search) = listing.search() {
        qb.push(" WHERE name ILIKE ");
        qb.push_bind(format!("%{}%", escape_like(search)));
        qb.push(" ESCAPE '\\'");
    }

    qb.push(" ORDER BY ")
        .push(listing.sort_field.column())
        .push(" ")
        .push(listing.sort_order.as_sql());

    qb
}

fn insert_sql(skip_existing: bool) -> String {
    format!(
        r#"
        INSERT INTO vendors (
            id, name, category, owner_name, department, vendor_owner_location,
            spend_365d, spend_30d, payment_type, status, has_contract, is_1099_vendor
        ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
        {}
        RETURNING {}
        "#,
        if skip_existing {
            "ON CONFLICT (name) DO NOTHING"
        } else {
            ""
        },
        VENDOR_COLUMNS
    )
}

async fn insert_row(
    conn: &mut PgConnection,
    sql: &str,
    vendor: &NewVendor,
) -> Result<Option<VendorRow>, sqlx::Error> {
    sqlx::query_as::<_, VendorRow>(sql)
        .bind(vendor.id.0)
        .bind(&vendor.name)
        .bind(&vendor.category)
        .bind(&vendor.owner_name)
        .bind(&vendor.department)
        .bind(&vendor.vendor_owner_location)
        .bind(vendor.spend_365d)
        .bind(vendor.spend_30d)
        .bind(&vendor.payment_type)
        .bind(&vendor.status)
        .bind(vendor.has_contract)
        .bind(vendor.is_1099_vendor)
        .fetch_optional(conn)
        .await
}

#[async_trait]
impl VendorRepository for PostgresVendorRepository {
    async fn list(&self, listing: &VendorListing) -> AppResult<Vec<Vendor>> {
        let timer = QueryTimer::start("list_vendors");
        let result = build_list_query(listing)
            .build_query_as::<VendorRow>()
            .fetch_all(&self.pool)
            .await;
        timer.finish(&result);

        let rows = result.map_err(|e| AppError::database(format!("查询供应商列表失败: {}", e)))?;
        Ok(rows.into_iter().map(vendor_from_row).collect())
    }

    async fn exists_by_name(&self, name: &str) -> AppResult<bool> {
        let timer = QueryTimer::start("vendor_exists_by_name");
        let result =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM vendors WHERE name = $1)")
                .bind(name)
                .fetch_one(&self.pool)
                .await;
        timer.finish(&result);

        result.map_err(|e| AppError::database(format!("检查供应商名称失败: {}", e)))
    }

    async fn insert(&self, vendor: &NewVendor) -> AppResult<Vendor> {
        let mut tx = self.tx_manager.begin().await?;

        let timer = QueryTimer::start("insert_vendor");
        let result = insert_row(&mut *tx, &insert_sql(false), vendor).await;
        timer.finish(&result);

        let row = match result {
            Ok(Some(row)) => row,
            Ok(None) => {
                TransactionManager::rollback(tx).await;
                return Err(AppError::database("插入供应商后未返回记录"));
            }
            Err(e) => {
                TransactionManager::rollback(tx).await;
                if is_unique_violation(&e) {
                    return Err(AppError::conflict(DUPLICATE_NAME_MESSAGE));
                }
                return Err(AppError::database(format!("插入供应商失败: {}", e)));
            }
        };

        TransactionManager::commit(tx).await?;
        Ok(vendor_from_row(row))
    }

    async fn count(&self) -> AppResult<i64> {
        let timer = QueryTimer::start("count_vendors");
        let result = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM vendors")
            .fetch_one(&self.pool)
            .await;
        timer.finish(&result);

        result.map_err(|e| AppError::database(format!("统计供应商数量失败: {}", e)))
    }

    async fn insert_missing(&self, vendors: &[NewVendor]) -> AppResult<u64> {
        let mut tx = self.tx_manager.begin().await?;
        let sql = insert_sql(true);
        let mut inserted = 0;

        for vendor in vendors {
            match insert_row(&mut *tx, &sql, vendor).await {
                Ok(Some(_)) => inserted += 1,
                Ok(None) => {}
                Err(e) => {
                    TransactionManager::rollback(tx).await;
                    return Err(AppError::database(format!(
                        "写入种子供应商 {} 失败: {}",
                        vendor.name, e
                    )));
                }
            }
        }

        TransactionManager::commit(tx).await?;
        Ok(inserted)
    }

    async fn update_logos(&self, assignments: &[LogoAssignment]) -> AppResult<u64> {
        let mut tx = self.tx_manager.begin().await?;
        let mut updated = 0;

        for assignment in assignments {
            let result = sqlx::query(
                r#"
                UPDATE vendors
                SET logo_url = $2, updated_at = now()
                WHERE name = $1 AND logo_url IS DISTINCT FROM $2
                "#,
            )
            .bind(&assignment.name)
            .bind(&assignment.logo_url)
            .execute(&mut *tx)
            .await;

            match result {
                Ok(done) => updated += done.rows_affected(),
                Err(e) => {
                    TransactionManager::rollback(tx).await;
                    return Err(AppError::database(format!(
                        "更新供应商 {} 的 logo 失败: {}",
                        assignment.name, e
                    )));
                }
            }
        }

        TransactionManager::commit(tx).await?;
        Ok(updated)
    }
}
