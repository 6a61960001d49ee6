//! vendorhub-bootstrap - 统一服务启动骨架
//!
//! 所有服务复用的启动逻辑

mod cors;
mod health;
mod infrastructure;
mod retry;
mod runtime;
mod starter;

pub use cors::*;
pub use health::*;
pub use infrastructure::*;
pub use retry::*;
pub use runtime::*;
pub use starter::*;
