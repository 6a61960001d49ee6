//! 种子数据与 logo 回填测试（内存仓储）

mod support;

use vendors::application::{SEED_THRESHOLD, SeedOutcome, ServiceHandler};
use vendors::infrastructure::catalog::{logo_assignments, seed_catalog};

use support::InMemoryVendorRepository;

#[tokio::test]
async fn test_seed_empty_directory() {
    let repo = InMemoryVendorRepository::new();
    let handler = ServiceHandler::new(repo.clone());

    let outcome = handler.seed_vendors(seed_catalog()).await.unwrap();

    assert_eq!(outcome, SeedOutcome::Seeded { inserted: 30 });
    assert_eq!(repo.len(), 30);
}

#[tokio::test]
async fn test_seed_skips_existing_names() {
    let repo = InMemoryVendorRepository::new();
    repo.put("Slack", 1);
    repo.put("Custom Vendor", 1);
    let handler = ServiceHandler::new(repo.clone());

    let outcome = handler.seed_vendors(seed_catalog()).await.unwrap();

    assert_eq!(outcome, SeedOutcome::Seeded { inserted: 29 });
    assert_eq!(repo.len(), 31);
}

#[tokio::test]
async fn test_seed_is_skipped_at_threshold() {
    let repo = InMemoryVendorRepository::new();
    for i in 0..SEED_THRESHOLD {
        repo.put(&format!("Vendor {i}"), 1);
    }
    let handler = ServiceHandler::new(repo.clone());

    let outcome = handler.seed_vendors(seed_catalog()).await.unwrap();

    assert_eq!(outcome, SeedOutcome::Skipped { existing: SEED_THRESHOLD });
    assert_eq!(repo.len() as i64, SEED_THRESHOLD);
}

#[tokio::test]
async fn test_backfill_logos_updates_only_changes() {
    let repo = InMemoryVendorRepository::new();
    repo.put("Slack", 1);
    repo.put("Stripe", 1);
    repo.put("Unknown Vendor", 1);
    let handler = ServiceHandler::new(repo.clone());

    let first = handler.backfill_logos(logo_assignments()).await.unwrap();
    let second = handler.backfill_logos(logo_assignments()).await.unwrap();

    assert_eq!(first, 2);
    assert_eq!(second, 0);

    let vendors = repo.all();
    let slack = vendors.iter().find(|v| v.name == "Slack").unwrap();
    assert!(slack.logo_url.as_deref().unwrap().starts_with("https://"));
    assert!(slack.updated_at.is_some());
    let unknown = vendors.iter().find(|v| v.name == "Unknown Vendor").unwrap();
    assert_eq!(unknown.logo_url, None);
    assert_eq!(unknown.updated_at, None);
}
