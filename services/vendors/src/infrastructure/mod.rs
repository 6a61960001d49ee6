//! 基础设施层

pub mod catalog;
pub mod maintenance;
pub mod persistence;
