//! Vendor queries

use crate::domain::listing::VendorListing;

/// 列表供应商查询（原始查询参数）
#[derive(Debug, Clone, Default)]
pub struct ListVendorsQuery {
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

impl ListVendorsQuery {
    /// 解析为列表条件，非法参数静默回退到默认值
    pub fn listing(&self) -> VendorListing {
        VendorListing::from_params(
            self.search.clone(),
            self.sort_by.as_deref(),
            self.sort_order.as_deref(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::listing::{SortField, SortOrder};

    #[test]
    fn test_listing_from_query() {
        let query = ListVendorsQuery {
            search: Some("acme".into()),
            sort_by: Some("spend_365d".into()),
            sort_order: Some("asc".into()),
        };

        let listing = query.listing();
        assert_eq!(listing.search(), Some("acme"));
        assert_eq!(listing.sort_field, SortField::Spend365d);
        assert_eq!(listing.sort_order, SortOrder::Asc);
    }

    #[test]
    fn test_default_query_lists_newest_first() {
        let listing = ListVendorsQuery::default().listing();

        assert_eq!(listing.search(), None);
        assert_eq!(listing.sort_field, SortField::CreatedAt);
        assert_eq!(listing.sort_order, SortOrder::Desc);
    }
}
