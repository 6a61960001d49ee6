//! 基础设施资源管理
//!
//! 由 bootstrap 统一初始化，再交给服务构建路由

use std::time::Duration;

use metrics_exporter_prometheus::PrometheusHandle;
use secrecy::ExposeSecret;
use sqlx::PgPool;
use tracing::info;
use vendorhub_adapter_postgres::{PostgresConfig, create_pool};
use vendorhub_config::AppConfig;
use vendorhub_errors::AppResult;

use crate::retry::{Backoff, with_retry};

/// 基础设施资源容器
#[derive(Clone)]
pub struct Infrastructure {
    /// PostgreSQL 连接池
    postgres_pool: PgPool,
    /// Prometheus 导出句柄（recorder 安装失败时为空）
    metrics: Option<PrometheusHandle>,
}

impl Infrastructure {
    /// 从配置创建基础设施资源（带重试）
    pub async fn from_config(
        config: &AppConfig,
        metrics: Option<PrometheusHandle>,
    ) -> AppResult<Self> {
        let pg_config = postgres_config(config);
        let postgres_pool = with_retry(&Backoff::default(), "PostgreSQL connection", || {
            let cfg = pg_config.clone();
            async move { create_pool(&cfg).await }
        })
        .await?;
        info!(
            max_connections = pg_config.max_connections,
            "PostgreSQL connection pool created"
        );

        Ok(Self {
            postgres_pool,
            metrics,
        })
    }

    /// 获取 PostgreSQL 连接池
    pub fn postgres_pool(&self) -> PgPool {
        self.postgres_pool.clone()
    }

    /// 获取 Prometheus 导出句柄
    pub fn metrics_handle(&self) -> Option<PrometheusHandle> {
        self.metrics.clone()
    }
}

fn postgres_config(config: &AppConfig) -> PostgresConfig {
    PostgresConfig::new(config.database.url.expose_secret())
        .with_max_connections(config.database.max_connections)
        .with_min_connections(config.database.min_connections)
        .with_acquire_timeout(Duration::from_secs(config.database.acquire_timeout_secs))
}
