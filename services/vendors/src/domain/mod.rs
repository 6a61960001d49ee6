//! 领域层
//!
//! 包含供应商实体、列表查询规则和仓储接口

pub mod entities;
pub mod ids;
pub mod listing;
pub mod repositories;

pub use entities::*;
pub use ids::*;
pub use listing::*;
pub use repositories::*;
