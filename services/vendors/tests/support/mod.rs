//! 测试辅助：内存仓储与路由构建

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use chrono::{DateTime, Duration, TimeZone, Utc};
use rust_decimal::Decimal;
use vendorhub_bootstrap::liveness_routes;
use vendorhub_errors::{AppError, AppResult};
use vendors::api::{AppState, router};
use vendors::application::ServiceHandler;
use vendors::domain::{
    DUPLICATE_NAME_MESSAGE, LogoAssignment, NewVendor, SortField, SortOrder, Vendor,
    VendorListing, VendorRepository,
};

/// 内存版供应商仓储，语义与 PostgreSQL 实现保持一致
#[derive(Default)]
pub struct InMemoryVendorRepository {
    vendors: Mutex<Vec<Vendor>>,
    fail_writes: Mutex<bool>,
}

impl InMemoryVendorRepository {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// 之后的写操作全部返回存储错误
    pub fn fail_writes(&self) {
        *self.fail_writes.lock().unwrap() = true;
    }

    /// 直接放入一条记录，created_at 按插入顺序递增
    pub fn put(&self, name: &str, spend_365d: i64) -> Vendor {
        let new = NewVendor::new(name, "Card").with_spend(Decimal::from(spend_365d), Decimal::ZERO);
        self.store(&new)
    }

    pub fn all(&self) -> Vec<Vendor> {
        self.vendors.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.vendors.lock().unwrap().len()
    }

    fn next_created_at(count: usize) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::seconds(count as i64)
    }

    fn store(&self, new: &NewVendor) -> Vendor {
        let mut vendors = self.vendors.lock().unwrap();
        let vendor = Vendor {
            id: new.id,
            name: new.name.clone(),
            category: new.category.clone(),
            logo_url: None,
            owner_name: new.owner_name.clone(),
            owner_avatar_url: None,
            department: new.department.clone(),
            vendor_owner_location: new.vendor_owner_location.clone(),
            spend_365d: new.spend_365d,
            spend_30d: new.spend_30d,
            payment_type: new.payment_type.clone(),
            status: new.status.clone(),
            description: None,
            has_contract: new.has_contract,
            is_1099_vendor: new.is_1099_vendor,
            created_at: Self::next_created_at(vendors.len()),
            updated_at: None,
        };
        vendors.push(vendor.clone());
        vendor
    }

    fn check_writable(&self) -> AppResult<()> {
        if *self.fail_writes.lock().unwrap() {
            return Err(AppError::database("connection reset by peer"));
        }
        Ok(())
    }
}

/// 与 `ILIKE '%' || escaped || '%'` 等价：不区分大小写的字面子串匹配
pub fn name_matches(search: Option<&str>, name: &str) -> bool {
    match search {
        Some(needle) => name.to_lowercase().contains(&needle.to_lowercase()),
        None => true,
    }
}

#[async_trait]
impl VendorRepository for InMemoryVendorRepository {
    async fn list(&self, listing: &VendorListing) -> AppResult<Vec<Vendor>> {
        let mut vendors: Vec<Vendor> = self
            .all()
            .into_iter()
            .filter(|v| name_matches(listing.search(), &v.name))
            .collect();

        vendors.sort_by(|a, b| {
            let ordering = match listing.sort_field {
                SortField::Name => a.name.cmp(&b.name),
                SortField::Spend365d => a.spend_365d.cmp(&b.spend_365d),
                SortField::Spend30d => a.spend_30d.cmp(&b.spend_30d),
                SortField::CreatedAt => a.created_at.cmp(&b.created_at),
            };
            match listing.sort_order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });

        Ok(vendors)
    }

    async fn exists_by_name(&self, name: &str) -> AppResult<bool> {
        Ok(self.vendors.lock().unwrap().iter().any(|v| v.name == name))
    }

    async fn insert(&self, vendor: &NewVendor) -> AppResult<Vendor> {
        self.check_writable()?;
        if self.exists_by_name(&vendor.name).await? {
            return Err(AppError::conflict(DUPLICATE_NAME_MESSAGE));
        }
        Ok(self.store(vendor))
    }

    async fn count(&self) -> AppResult<i64> {
        Ok(self.len() as i64)
    }

    async fn insert_missing(&self, vendors: &[NewVendor]) -> AppResult<u64> {
        self.check_writable()?;
        let mut inserted = 0;
        for vendor in vendors {
            if !self.exists_by_name(&vendor.name).await? {
                self.store(vendor);
                inserted += 1;
            }
        }
        Ok(inserted)
    }

    async fn update_logos(&self, assignments: &[LogoAssignment]) -> AppResult<u64> {
        self.check_writable()?;
        let mut vendors = self.vendors.lock().unwrap();
        let mut updated = 0;
        for assignment in assignments {
            for vendor in vendors.iter_mut().filter(|v| v.name == assignment.name) {
                if vendor.logo_url.as_deref() != Some(assignment.logo_url.as_str()) {
                    vendor.logo_url = Some(assignment.logo_url.clone());
                    vendor.updated_at = Some(Utc::now());
                    updated += 1;
                }
            }
        }
        Ok(updated)
    }
}

/// 业务路由 + /health
pub fn app(repo: Arc<InMemoryVendorRepository>) -> Router {
    let handler = Arc::new(ServiceHandler::new(repo));
    router(AppState::new(handler)).merge(liveness_routes())
}
