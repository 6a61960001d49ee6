//! 健康检查模块
//!
//! 提供 /health、/ready 和 /metrics 端点

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use sqlx::PgPool;
use vendorhub_adapter_postgres::check_connection;

/// 就绪检查状态
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub checks: Vec<ComponentHealth>,
}

/// 组件健康状态
#[derive(Debug, Clone, Serialize)]
pub struct ComponentHealth {
    pub name: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl HealthStatus {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            checks: vec![],
        }
    }

    pub fn add_check(&mut self, check: ComponentHealth) {
        if check.status != "healthy" {
            self.status = "unhealthy".to_string();
        }
        self.checks.push(check);
    }

    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

impl ComponentHealth {
    pub fn healthy(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: "healthy".to_string(),
            message: None,
        }
    }

    pub fn unhealthy(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: "unhealthy".to_string(),
            message: Some(message.into()),
        }
    }
}

/// 检查 PostgreSQL 是否可用
pub async fn check_postgres(pool: &PgPool) -> ComponentHealth {
    match check_connection(pool).await {
        Ok(()) => ComponentHealth::healthy("postgres"),
        Err(e) => ComponentHealth::unhealthy("postgres", e.message()),
    }
}

/// 存活检查路由（不检查任何依赖）
pub fn liveness_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/health", get(health_handler))
}

/// 就绪检查路由
pub fn readiness_routes<S>(pool: PgPool) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/ready", get(ready_handler))
        .with_state(pool)
}

/// Prometheus 导出路由
pub fn metrics_routes<S>(handle: PrometheusHandle) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/metrics", get(metrics_handler))
        .with_state(handle)
}

/// 运维端点合集，metrics 未安装时不挂载 /metrics
pub fn health_routes<S>(pool: PgPool, metrics: Option<PrometheusHandle>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let router = liveness_routes().merge(readiness_routes(pool));
    match metrics {
        Some(handle) => router.merge(metrics_routes(handle)),
        None => router,
    }
}

#[derive(Serialize)]
struct Liveness {
    status: &'static str,
}

/// Liveness 端点处理器
async fn health_handler() -> Json<Liveness> {
    Json(Liveness { status: "ok" })
}

/// Readiness 端点处理器
async fn ready_handler(State(pool): State<PgPool>) -> impl IntoResponse {
    let mut status = HealthStatus::healthy();
    status.add_check(check_postgres(&pool).await);

    let code = if status.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (code, Json(status))
}

/// Metrics 端点处理器
async fn metrics_handler(State(handle): State<PrometheusHandle>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; version=0.0.4; charset=utf-8")],
        handle.render(),
    )
}
