//! 供应商列表规则
//!
//! 排序字段只能来自白名单，未知值一律回退到 `created_at`；
//! 排序方向只有精确的 `asc` 为升序，其余均为降序。两者都不会报错。

/// 可排序字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortField {
    Name,
    Spend365d,
    Spend30d,
    #[default]
    CreatedAt,
}

impl SortField {
    /// 解析查询参数，无法识别时回退到默认字段
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("name") => Self::Name,
            Some("spend_365d") => Self::Spend365d,
            Some("spend_30d") => Self::Spend30d,
            Some("created_at") => Self::CreatedAt,
            _ => Self::default(),
        }
    }

    /// 对应的数据库列名
    pub fn column(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Spend365d => "spend_365d",
            Self::Spend30d => "spend_30d",
            Self::CreatedAt => "created_at",
        }
    }
}

/// 排序方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// 仅 `asc` 为升序（区分大小写）
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("asc") => Self::Asc,
            _ => Self::Desc,
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// 解析后的列表条件
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VendorListing {
    search: Option<String>,
    pub sort_field: SortField,
    pub sort_order: SortOrder,
}

impl VendorListing {
    pub fn from_params(
        search: Option<String>,
        sort_by: Option<&str>,
        sort_order: Option<&str>,
    ) -> Self {
        Self {
            search: search.filter(|s| !s.is_empty()),
            sort_field: SortField::from_param(sort_by),
            sort_order: SortOrder::from_param(sort_order),
        }
    }

    /// 非空的搜索文本
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }
}
