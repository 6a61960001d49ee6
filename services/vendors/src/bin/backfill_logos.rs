//! 按名称回填供应商 logo

use tracing::info;
use vendors::infrastructure::catalog::logo_assignments;
use vendors::infrastructure::maintenance::maintenance_handler;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let handler = maintenance_handler("config").await?;
    let updated = handler.backfill_logos(logo_assignments()).await?;

    info!(updated, "Updated vendor logos");
    Ok(())
}
