//! vendors Service - Vendor Directory

use std::sync::Arc;

use tracing::info;
use vendorhub_bootstrap::{Infrastructure, run};

use vendors::api::{AppState, router};
use vendors::application::ServiceHandler;
use vendors::infrastructure::persistence::{PostgresVendorRepository, ensure_schema};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    run("config", |infra: Infrastructure| async move {
        info!("Initializing vendors Service...");

        let pool = infra.postgres_pool();
        ensure_schema(&pool).await?;

        let vendor_repo = Arc::new(PostgresVendorRepository::new(pool));
        info!("Repositories initialized");

        let handler = Arc::new(ServiceHandler::new(vendor_repo));
        Ok(router(AppState::new(handler)))
    })
    .await
}
