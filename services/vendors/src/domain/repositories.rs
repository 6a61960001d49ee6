//! 供应商仓储接口

use async_trait::async_trait;
use vendorhub_errors::AppResult;

use crate::domain::entities::{LogoAssignment, NewVendor, Vendor};
use crate::domain::listing::VendorListing;

/// 供应商仓储接口
///
/// 实现方负责把存储层错误映射为 `AppError::Database`，
/// 名称唯一约束冲突映射为 `AppError::Conflict`。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VendorRepository: Send + Sync {
    /// 按条件列出全部供应商（不分页）
    async fn list(&self, listing: &VendorListing) -> AppResult<Vec<Vendor>>;

    /// 名称是否已存在（精确匹配，区分大小写）
    async fn exists_by_name(&self, name: &str) -> AppResult<bool>;

    /// 在单个事务中插入并读回完整记录，失败时回滚
    async fn insert(&self, vendor: &NewVendor) -> AppResult<Vendor>;

    /// 供应商总数
    async fn count(&self) -> AppResult<i64>;

    /// 在单个事务中批量插入，已存在的名称跳过；返回实际插入数
    async fn insert_missing(&self, vendors: &[NewVendor]) -> AppResult<u64>;

    /// 在单个事务中按名称更新 logo（仅当缺失或不同）；返回实际更新数
    async fn update_logos(&self, assignments: &[LogoAssignment]) -> AppResult<u64>;
}
