//! Vendor commands

use vendorhub_errors::{AppError, AppResult};

use crate::domain::entities::NewVendor;

const NAME_LEN: (usize, usize) = (2, 100);
const PAYMENT_TYPE_LEN: (usize, usize) = (2, 20);
const OPTIONAL_FIELD_MAX: usize = 50;

/// 创建供应商命令
#[derive(Debug, Clone)]
pub struct CreateVendorCommand {
    pub name: String,
    pub payment_type: String,
    pub category: Option<String>,
    pub department: Option<String>,
    pub vendor_owner_location: Option<String>,
}

impl CreateVendorCommand {
    pub fn new(name: impl Into<String>, payment_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            payment_type: payment_type.into(),
            category: None,
            department: None,
            vendor_owner_location: None,
        }
    }

    /// 校验字段长度（按字符计）
    pub fn validate(&self) -> AppResult<()> {
        check_len("name", &self.name, NAME_LEN)?;
        check_len("payment_type", &self.payment_type, PAYMENT_TYPE_LEN)?;

        for (field, value) in [
            ("category", &self.category),
            ("department", &self.department),
            ("vendor_owner_location", &self.vendor_owner_location),
        ] {
            if let Some(value) = value {
                check_len(field, value, (0, OPTIONAL_FIELD_MAX))?;
            }
        }

        Ok(())
    }

    /// 构造待插入记录，其余字段取默认值
    pub fn into_new_vendor(self) -> NewVendor {
        NewVendor::new(self.name, self.payment_type)
            .with_category(self.category)
            .with_department(self.department)
            .with_location(self.vendor_owner_location)
    }
}

fn check_len(field: &str, value: &str, (min, max): (usize, usize)) -> AppResult<()> {
    let len = value.chars().count();
    if len < min {
        return Err(AppError::validation(format!(
            "{} must be at least {} characters",
            field, min
        )));
    }
    if len > max {
        return Err(AppError::validation(format!(
            "{} must be at most {} characters",
            field, max
        )));
    }
    Ok(())
}
