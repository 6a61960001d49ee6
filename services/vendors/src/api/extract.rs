//! 请求体提取器

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;
use vendorhub_errors::AppError;

use super::error::ApiError;

/// JSON 请求体提取器
///
/// 字段缺失或类型错误返回 422，其余（非法 JSON、缺少 Content-Type、读取失败）返回 400，
/// 错误体统一为 problem details。
pub struct VendorJson<T>(pub T);

impl<S, T> FromRequest<S> for VendorJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(JsonRejection::JsonDataError(e)) => {
                Err(AppError::validation(e.body_text()).into())
            }
            Err(rejection) => Err(AppError::bad_request(rejection.body_text()).into()),
        }
    }
}
