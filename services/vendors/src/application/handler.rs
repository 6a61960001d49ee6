//! Business logic handler

use std::sync::Arc;

use tracing::{error, info, warn};
use vendorhub_errors::{AppError, AppResult};
use vendorhub_telemetry::{record_vendor_created, record_vendor_rejected};

use crate::domain::entities::{DUPLICATE_NAME_MESSAGE, LogoAssignment, NewVendor, Vendor};
use crate::domain::repositories::VendorRepository;

use super::commands::CreateVendorCommand;
use super::queries::ListVendorsQuery;

/// 已有供应商数量达到该值时跳过种子数据
pub const SEED_THRESHOLD: i64 = 25;

const CREATE_FAILED: &str = "Failed to create vendor";
const LIST_FAILED: &str = "Failed to list vendors";

/// 种子数据执行结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// 已有足够数据，未写入
    Skipped { existing: i64 },
    /// 实际插入条数（已存在的名称不计）
    Seeded { inserted: u64 },
}

pub struct ServiceHandler {
    vendor_repo: Arc<dyn VendorRepository>,
}

impl ServiceHandler {
    pub fn new(vendor_repo: Arc<dyn VendorRepository>) -> Self {
        Self { vendor_repo }
    }

    /// 列出供应商
    ///
    /// 非法的排序参数不会报错，回退到默认排序。
    pub async fn list_vendors(&self, query: ListVendorsQuery) -> AppResult<Vec<Vendor>> {
        let listing = query.listing();

        self.vendor_repo.list(&listing).await.map_err(|e| {
            error!(error = %e, "Failed to list vendors");
            AppError::database(LIST_FAILED)
        })
    }

    /// 创建供应商
    pub async fn create_vendor(&self, cmd: CreateVendorCommand) -> AppResult<Vendor> {
        info!(name = %cmd.name, "Creating vendor");

        // 1. 验证命令
        if let Err(e) = cmd.validate() {
            record_vendor_rejected("validation");
            return Err(e);
        }

        // 2. 检查名称是否已存在
        let exists = self
            .vendor_repo
            .exists_by_name(&cmd.name)
            .await
            .map_err(|e| self.storage_failure(e))?;

        if exists {
            record_vendor_rejected("duplicate");
            return Err(AppError::conflict(DUPLICATE_NAME_MESSAGE));
        }

        // 3. 持久化（仓储内部失败回滚）
        let new_vendor = cmd.into_new_vendor();
        let vendor = match self.vendor_repo.insert(&new_vendor).await {
            Ok(vendor) => vendor,
            Err(AppError::Conflict(_)) => {
                // 并发插入同名记录，由唯一索引拦截
                warn!(name = %new_vendor.name, "Concurrent duplicate vendor insert");
                record_vendor_rejected("duplicate");
                return Err(AppError::conflict(DUPLICATE_NAME_MESSAGE));
            }
            Err(e) => return Err(self.storage_failure(e)),
        };

        record_vendor_created();
        info!(vendor_id = %vendor.id, "Vendor created successfully");
        Ok(vendor)
    }

    /// 写入种子数据
    ///
    /// 已有供应商数量达到 [`SEED_THRESHOLD`] 时跳过。
    pub async fn seed_vendors(&self, catalog: Vec<NewVendor>) -> AppResult<SeedOutcome> {
        let existing = self.vendor_repo.count().await?;
        if existing >= SEED_THRESHOLD {
            info!(existing, "Seed skipped: vendors already exist");
            return Ok(SeedOutcome::Skipped { existing });
        }

        let inserted = self.vendor_repo.insert_missing(&catalog).await?;
        info!(
            inserted,
            skipped = (catalog.len() as u64).saturating_sub(inserted),
            "Seeded vendors"
        );
        Ok(SeedOutcome::Seeded { inserted })
    }

    /// 按名称回填 logo，返回更新条数
    pub async fn backfill_logos(&self, assignments: Vec<LogoAssignment>) -> AppResult<u64> {
        let updated = self.vendor_repo.update_logos(&assignments).await?;
        info!(updated, candidates = assignments.len(), "Vendor logos updated");
        Ok(updated)
    }

    fn storage_failure(&self, e: AppError) -> AppError {
        error!(error = %e, "Failed to create vendor");
        record_vendor_rejected("storage");
        AppError::database(CREATE_FAILED)
    }
}
