//! 数据库行到领域对象的转换

use crate::domain::entities::Vendor;
use crate::domain::ids::VendorId;

use super::rows::VendorRow;

/// 将 VendorRow 转换为 Vendor
pub fn vendor_from_row(row: VendorRow) -> Vendor {
    Vendor {
        id: VendorId::from_uuid(row.id),
        name: row.name,
        category: row.category,
        logo_url: row.logo_url,
        owner_name: row.owner_name,
        owner_avatar_url: row.owner_avatar_url,
        department: row.department,
        vendor_owner_location: row.vendor_owner_location,
        spend_365d: row.spend_365d,
        spend_30d: row.spend_30d,
        payment_type: row.payment_type,
        status: row.status,
        description: row.description,
        has_contract: row.has_contract,
        is_1099_vendor: row.is_1099_vendor,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}
