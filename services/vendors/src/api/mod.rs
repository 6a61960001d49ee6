//! HTTP 接口层

mod dto;
mod error;
mod extract;
mod routes;

pub use dto::*;
pub use error::ApiError;
pub use extract::VendorJson;
pub use routes::{AppState, router};
