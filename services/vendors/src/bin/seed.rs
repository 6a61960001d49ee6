//! 写入种子供应商
//!
//! 已有 25 个及以上供应商时跳过；已存在的名称不会重复写入。

use tracing::info;
use vendors::infrastructure::catalog::seed_catalog;
use vendors::infrastructure::maintenance::maintenance_handler;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let handler = maintenance_handler("config").await?;
    let outcome = handler.seed_vendors(seed_catalog()).await?;

    info!(?outcome, "Seeding finished");
    Ok(())
}
