//! PostgreSQL 仓储集成测试
//!
//! 需要可用的数据库（`DATABASE_URL`），默认忽略：
//! `cargo test -p vendors --test postgres_repository_test -- --ignored`

use rust_decimal::Decimal;
use sqlx::PgPool;
use vendorhub_errors::AppError;
use vendors::domain::{LogoAssignment, NewVendor, Vendor, VendorListing, VendorRepository};
use vendors::infrastructure::persistence::{PostgresVendorRepository, ensure_schema};

async fn setup(pool: PgPool) -> PostgresVendorRepository {
    ensure_schema(&pool).await.unwrap();
    PostgresVendorRepository::new(pool)
}

fn vendor(name: &str, spend_365d: i64) -> NewVendor {
    NewVendor::new(name, "Card").with_spend(Decimal::from(spend_365d), Decimal::ZERO)
}

fn names(list: &[Vendor]) -> Vec<&str> {
    list.iter().map(|v| v.name.as_str()).collect()
}

#[sqlx::test(migrations = false)]
#[ignore]
async fn test_schema_is_idempotent(pool: PgPool) {
    ensure_schema(&pool).await.unwrap();
    ensure_schema(&pool).await.unwrap();
}

#[sqlx::test(migrations = false)]
#[ignore]
async fn test_insert_returns_stored_row(pool: PgPool) {
    let repo = setup(pool).await;
    let new = NewVendor::new("Acme Corp", "Card").with_category(Some("Software".into()));

    let stored = repo.insert(&new).await.unwrap();

    assert_eq!(stored.id, new.id);
    assert_eq!(stored.name, "Acme Corp");
    assert_eq!(stored.category.as_deref(), Some("Software"));
    assert_eq!(stored.status, "active");
    assert_eq!(stored.spend_365d, Decimal::ZERO);
    assert!(!stored.has_contract);
    assert!(stored.updated_at.is_none());
    assert!(repo.exists_by_name("Acme Corp").await.unwrap());
    assert!(!repo.exists_by_name("acme corp").await.unwrap());
}

#[sqlx::test(migrations = false)]
#[ignore]
async fn test_unique_index_rejects_duplicate(pool: PgPool) {
    let repo = setup(pool).await;
    repo.insert(&vendor("Acme Corp", 100)).await.unwrap();

    let err = repo.insert(&vendor("Acme Corp", 200)).await.unwrap_err();

    assert!(matches!(err, AppError::Conflict(_)));
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[sqlx::test(migrations = false)]
#[ignore]
async fn test_list_search_and_sort(pool: PgPool) {
    let repo = setup(pool).await;
    repo.insert(&vendor("Acme Corp", 100)).await.unwrap();
    repo.insert(&vendor("Zeta Inc", 50)).await.unwrap();

    let by_spend = repo
        .list(&VendorListing::from_params(None, Some("spend_365d"), Some("asc")))
        .await
        .unwrap();
    assert_eq!(names(&by_spend), ["Zeta Inc", "Acme Corp"]);

    let searched = repo
        .list(&VendorListing::from_params(Some("ACME".into()), None, None))
        .await
        .unwrap();
    assert_eq!(names(&searched), ["Acme Corp"]);
}

#[sqlx::test(migrations = false)]
#[ignore]
async fn test_search_wildcards_are_literal(pool: PgPool) {
    let repo = setup(pool).await;
    repo.insert(&vendor("Save 50% Ltd", 1)).await.unwrap();
    repo.insert(&vendor("Save 500 Ltd", 1)).await.unwrap();
    repo.insert(&vendor("snake_case Co", 1)).await.unwrap();
    repo.insert(&vendor("snakeXcase Co", 1)).await.unwrap();

    let percent = repo
        .list(&VendorListing::from_params(Some("50%".into()), None, None))
        .await
        .unwrap();
    assert_eq!(names(&percent), ["Save 50% Ltd"]);

    let underscore = repo
        .list(&VendorListing::from_params(Some("e_c".into()), None, None))
        .await
        .unwrap();
    assert_eq!(names(&underscore), ["snake_case Co"]);
}

#[sqlx::test(migrations = false)]
#[ignore]
async fn test_insert_missing_skips_existing(pool: PgPool) {
    let repo = setup(pool).await;
    repo.insert(&vendor("Slack", 1)).await.unwrap();

    let inserted = repo
        .insert_missing(&[vendor("Slack", 2), vendor("Stripe", 3)])
        .await
        .unwrap();

    assert_eq!(inserted, 1);
    assert_eq!(repo.count().await.unwrap(), 2);
}

#[sqlx::test(migrations = false)]
#[ignore]
async fn test_update_logos_touches_changed_rows(pool: PgPool) {
    let repo = setup(pool).await;
    repo.insert(&vendor("Slack", 1)).await.unwrap();
    let assignments = [LogoAssignment::new("Slack", "https://logo.example/slack.png")];

    assert_eq!(repo.update_logos(&assignments).await.unwrap(), 1);
    assert_eq!(repo.update_logos(&assignments).await.unwrap(), 0);

    let listed = repo.list(&VendorListing::default()).await.unwrap();
    assert_eq!(listed[0].logo_url.as_deref(), Some("https://logo.example/slack.png"));
    assert!(listed[0].updated_at.is_some());
}
