//! 供应商路由

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    routing::get,
};
use tracing::debug;

use crate::application::ServiceHandler;

use super::dto::{CreateVendorRequest, CreateVendorResponse, ListVendorsParams, VendorResponse};
use super::error::ApiError;
use super::extract::VendorJson;

#[derive(Clone)]
pub struct AppState {
    pub handler: Arc<ServiceHandler>,
}

impl AppState {
    pub fn new(handler: Arc<ServiceHandler>) -> Self {
        Self { handler }
    }
}

/// 供应商路由：`GET /vendors`、`POST /vendors`
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/vendors", get(list_vendors).post(create_vendor))
        .with_state(state)
}

async fn list_vendors(
    State(state): State<AppState>,
    params: Result<Query<ListVendorsParams>, QueryRejection>,
) -> Result<Json<Vec<VendorResponse>>, ApiError> {
    // 列表接口不因查询参数报错，无法解析时按默认条件查询
    let params = match params {
        Ok(Query(params)) => params,
        Err(rejection) => {
            debug!(error = %rejection, "Ignoring malformed vendor list query");
            ListVendorsParams::default()
        }
    };

    let vendors = state.handler.list_vendors(params.into()).await?;
    Ok(Json(vendors.into_iter().map(VendorResponse::from).collect()))
}

async fn create_vendor(
    State(state): State<AppState>,
    VendorJson(req): VendorJson<CreateVendorRequest>,
) -> Result<(StatusCode, Json<CreateVendorResponse>), ApiError> {
    let vendor = state.handler.create_vendor(req.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreateVendorResponse::created(vendor.id.0)),
    ))
}
