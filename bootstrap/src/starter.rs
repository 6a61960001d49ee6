//! 服务启动器
//!
//! 提供统一的 HTTP 服务启动模式

use std::future::Future;

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use vendorhub_config::AppConfig;
use vendorhub_errors::AppResult;
use vendorhub_telemetry::init_metrics;

use crate::cors::cors_layer;
use crate::health::health_routes;
use crate::infrastructure::Infrastructure;
use crate::runtime::{init_runtime, shutdown_signal};

/// 运行 HTTP 服务
///
/// 所有服务的统一入口点。它负责：
/// 1. 加载配置
/// 2. 初始化运行时（日志）
/// 3. 安装 Prometheus recorder
/// 4. 创建基础设施资源（数据库连接池，带重试）
/// 5. 调用用户提供的闭包构建业务路由
/// 6. 挂载 /health、/ready、/metrics 以及 trace / CORS 层
/// 7. 启动服务器并处理 graceful shutdown
///
/// # 示例
///
/// ```ignore
/// use vendorhub_bootstrap::run;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     run("config", |infra| async move {
///         Ok(my_router(infra.postgres_pool()))
///     }).await
/// }
/// ```
pub async fn run<F, Fut>(
    config_dir: &str,
    router_builder: F,
) -> Result<(), Box<dyn std::error::Error>>
where
    F: FnOnce(Infrastructure) -> Fut,
    Fut: Future<Output = AppResult<Router>>,
{
    // 1. 加载配置
    let config = AppConfig::load(config_dir)?;

    // 2. 初始化运行时
    init_runtime(&config);

    info!("Starting {} service", config.app_name);

    // 3. 初始化 Metrics
    let metrics = match init_metrics() {
        Ok(handle) => Some(handle),
        Err(e) => {
            warn!(error = %e, "Prometheus recorder not installed, /metrics disabled");
            None
        }
    };

    // 4. 创建基础设施（带重试）
    let infra = Infrastructure::from_config(&config, metrics).await?;
    let pool = infra.postgres_pool();
    let metrics = infra.metrics_handle();

    // 5. 构建业务路由
    let app = router_builder(infra)
        .await?
        .merge(health_routes(pool, metrics))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.cors));

    // 6. 绑定地址
    let listener =
        tokio::net::TcpListener::bind((config.server.host.as_str(), config.server.port)).await?;
    let addr = listener.local_addr()?;

    info!(%addr, "HTTP server starting");

    // 7. 启动服务器
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Service stopped");

    Ok(())
}
