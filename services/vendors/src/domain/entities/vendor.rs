//! 供应商实体

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::domain::ids::VendorId;

/// 新建供应商的初始状态
pub const ACTIVE_STATUS: &str = "active";

/// 重名时返回给调用方的消息
pub const DUPLICATE_NAME_MESSAGE: &str = "Vendor with this name already exists";

/// 已持久化的供应商
#[derive(Debug, Clone, PartialEq)]
pub struct Vendor {
    pub id: VendorId,
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
    /// 首次修改前为空
    pub updated_at: Option<DateTime<Utc>>,
}

/// 待插入的供应商
///
/// `created_at` 由数据库生成，插入后通过 RETURNING 读回完整的 [`Vendor`]。
#[derive(Debug, Clone, PartialEq)]
pub struct NewVendor {
    pub id: VendorId,
    pub name: String,
    pub category: Option<String>,
    pub owner_name: Option<String>,
    pub department: Option<String>,
    pub vendor_owner_location: Option<String>,
    pub spend_365d: Decimal,
    pub spend_30d: Decimal,
    pub payment_type: String,
    pub status: String,
    pub has_contract: bool,
    pub is_1099_vendor: bool,
}

impl NewVendor {
    /// 以默认值创建：status=active、金额为 0、标志位为 false
    pub fn new(name: impl Into<String>, payment_type: impl Into<String>) -> Self {
        Self {
            id: VendorId::new(),
            name: name.into(),
            category: None,
            owner_name: None,
            department: None,
            vendor_owner_location: None,
            spend_365d: Decimal::ZERO,
            spend_30d: Decimal::ZERO,
            payment_type: payment_type.into(),
            status: ACTIVE_STATUS.to_string(),
            has_contract: false,
            is_1099_vendor: false,
        }
    }

    pub fn with_category(mut self, category: Option<String>) -> Self {
        self.category = category;
        self
    }

    pub fn with_owner_name(mut self, owner_name: Option<String>) -> Self {
        self.owner_name = owner_name;
        self
    }

    pub fn with_department(mut self, department: Option<String>) -> Self {
        self.department = department;
        self
    }

    pub fn with_location(mut self, location: Option<String>) -> Self {
        self.vendor_owner_location = location;
        self
    }

    pub fn with_spend(mut self, spend_365d: Decimal, spend_30d: Decimal) -> Self {
        self.spend_365d = spend_365d;
        self.spend_30d = spend_30d;
        self
    }
}

/// 按名称设置 logo 的一条指令
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoAssignment {
    pub name: String,
    pub logo_url: String,
}

impl LogoAssignment {
    pub fn new(name: impl Into<String>, logo_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            logo_url: logo_url.into(),
        }
    }
}
