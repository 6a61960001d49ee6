//! 数据库行映射结构

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

/// 查询 vendors 表时使用的列
pub const VENDOR_COLUMNS: &str = "id, name, category, logo_url, owner_name, owner_avatar_url, \
     department, vendor_owner_location, spend_365d, spend_30d, payment_type, status, \
     description, has_contract, is_1099_vendor, created_at, updated_at";

/// 供应商数据库行
#[derive(Debug, FromRow)]
pub struct VendorRow {
    pub id: Uuid,
    pub name: String,
    pub category: Option<String>,
    pub logo_url: Option<String>,
    pub owner_name: Option<String>,
    pub owner_avatar_url: Option<String>,
    pub department: Option<String>,
    pub vendor_owner_location: Option<String>,
    pub spend_365d: Decimal,
    pub spend_30d: Decimal,
    pub payment_type: String,
    pub status: String,
    pub description: Option<String>,
    pub has_contract: bool,
    pub is_1099_vendor: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}
