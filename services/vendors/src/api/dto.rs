//! 请求/响应结构

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::{CreateVendorCommand, ListVendorsQuery};
use crate::domain::entities::Vendor;

pub const CREATED_MESSAGE: &str = "Vendor created successfully";

/// `GET /vendors` 查询参数
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListVendorsParams {
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

impl From<ListVendorsParams> for ListVendorsQuery {
    fn from(params: ListVendorsParams) -> Self {
        Self {
            search: params.search,
            sort_by: params.sort_by,
            sort_order: params.sort_order,
        }
    }
}

/// `POST /vendors` 请求体，未知字段忽略
#[derive(Debug, Clone, Deserialize)]
pub struct CreateVendorRequest {
    pub name: String,
    pub payment_type: String,
    pub category: Option<String>,
    pub department: Option<String>,
    pub vendor_owner_location: Option<String>,
}

impl From<CreateVendorRequest> for CreateVendorCommand {
    fn from(req: CreateVendorRequest) -> Self {
        Self {
            name: req.name,
            payment_type: req.payment_type,
            category: req.category,
            department: req.department,
            vendor_owner_location: req.vendor_owner_location,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateVendorResponse {
    pub id: Uuid,
    pub message: String,
}

impl CreateVendorResponse {
    pub fn created(id: Uuid) -> Self {
        Self {
            id,
            message: CREATED_MESSAGE.to_string(),
        }
    }
}

/// 供应商响应，金额输出为 JSON 数字
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorResponse {
    pub id: Uuid,
    pub name: String,
    pub category: Option<String>,
    pub logo_url: Option<String>,
    pub owner_name: Option<String>,
    pub owner_avatar_url: Option<String>,
    pub department: Option<String>,
    pub vendor_owner_location: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub spend_365d: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub spend_30d: Decimal,
    pub payment_type: String,
    pub status: String,
    pub description: Option<String>,
    pub has_contract: bool,
    pub is_1099_vendor: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Vendor> for VendorResponse {
    fn from(v: Vendor) -> Self {
        Self {
            id: v.id.0,
            name: v.name,
            category: v.category,
            logo_url: v.logo_url,
            owner_name: v.owner_name,
            owner_avatar_url: v.owner_avatar_url,
            department: v.department,
            vendor_owner_location: v.vendor_owner_location,
            spend_365d: v.spend_365d,
            spend_30d: v.spend_30d,
            payment_type: v.payment_type,
            status: v.status,
            description: v.description,
            has_contract: v.has_contract,
            is_1099_vendor: v.is_1099_vendor,
            created_at: v.created_at,
            updated_at: v.updated_at,
        }
    }
}
