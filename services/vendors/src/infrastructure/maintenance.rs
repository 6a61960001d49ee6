//! 维护工具共用的启动逻辑

use std::sync::Arc;

use vendorhub_bootstrap::{Infrastructure, init_runtime};
use vendorhub_config::AppConfig;

use crate::application::ServiceHandler;
use crate::infrastructure::persistence::{PostgresVendorRepository, ensure_schema};

/// 加载配置、连接数据库并确保表结构存在，返回业务处理器
pub async fn maintenance_handler(config_dir: &str) -> anyhow::Result<ServiceHandler> {
    let config = AppConfig::load(config_dir)?;
    init_runtime(&config);

    let infra = Infrastructure::from_config(&config, None).await?;
    let pool = infra.postgres_pool();
    ensure_schema(&pool).await?;

    Ok(ServiceHandler::new(Arc::new(PostgresVendorRepository::new(pool))))
}
