//! 领域实体

mod vendor;

pub use vendor::*;
