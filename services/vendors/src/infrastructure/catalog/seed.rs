//! 种子供应商目录

use std::hash::{DefaultHasher, Hash, Hasher};

use rust_decimal::Decimal;

use crate::domain::entities::NewVendor;

struct CuratedVendor {
    name: &'static str,
    category: &'static str,
    owner_name: &'static str,
    department: &'static str,
    location: &'static str,
    /// 金额以分计
    spend_365d: i64,
    spend_30d: i64,
    payment_type: &'static str,
}

const CURATED_VENDORS: &[CuratedVendor] = &[
    CuratedVendor {
        name: "Amazon Web Services",
        category: "Cloud Infrastructure",
        owner_name: "Sarah Lee",
        department: "Engineering",
        location: "Seattle",
        spend_365d: 8450075,
        spend_30d: 720000,
        payment_type: "Card",
    },
    CuratedVendor {
        name: "Google Workspace",
        category: "Productivity",
        owner_name: "Michael Chen",
        department: "IT",
        location: "Mountain View",
        spend_365d: 1524000,
        spend_30d: 120000,
        payment_type: "ACH",
    },
    CuratedVendor {
        name: "Slack",
        category: "Communication",
        owner_name: "Anita Rao",
        department: "Operations",
        location: "San Francisco",
        spend_365d: 980000,
        spend_30d: 0,
        payment_type: "Card",
    },
    CuratedVendor {
        name: "Stripe",
        category: "Payments",
        owner_name: "David Kim",
        department: "Finance",
        location: "San Francisco",
        spend_365d: 4120025,
        spend_30d: 340050,
        payment_type: "ACH",
    },
    CuratedVendor {
        name: "Notion",
        category: "Knowledge Base",
        owner_name: "Emma Wilson",
        department: "Product",
        location: "New York",
        spend_365d: 640000,
        spend_30d: 0,
        payment_type: "Card",
    },
];

/// 自动生成的 SaaS 供应商名称
pub const GENERATED_VENDOR_NAMES: &[&str] = &[
    "Zoom", "Figma", "GitHub", "Atlassian", "Jira", "Confluence", "Datadog", "New Relic",
    "SendGrid", "Twilio", "Snowflake", "MongoDB", "Postman", "Sentry", "Cloudflare", "Heroku",
    "DigitalOcean", "Netlify", "Vercel", "OpenAI", "Linear", "Asana", "Monday.com", "HubSpot",
    "Salesforce",
];

/// 完整的种子目录：5 个精选供应商 + 25 个生成的 SaaS 供应商
pub fn seed_catalog() -> Vec<NewVendor> {
    let curated = CURATED_VENDORS.iter().map(|v| {
        NewVendor::new(v.name, v.payment_type)
            .with_category(Some(v.category.into()))
            .with_owner_name(Some(v.owner_name.into()))
            .with_department(Some(v.department.into()))
            .with_location(Some(v.location.into()))
            .with_spend(Decimal::new(v.spend_365d, 2), Decimal::new(v.spend_30d, 2))
    });

    let generated = GENERATED_VENDOR_NAMES.iter().map(|name| {
        let (spend_365d, spend_30d) = generated_spend(name);
        NewVendor::new(*name, "Card")
            .with_category(Some("SaaS".into()))
            .with_owner_name(Some("Auto Seed".into()))
            .with_department(Some("General".into()))
            .with_location(Some("Remote".into()))
            .with_spend(spend_365d, spend_30d)
    });

    curated.chain(generated).collect()
}

/// 由名称决定的伪随机金额：365 天在 [5000, 45000)，30 天在 [0, 3000)
pub fn generated_spend(name: &str) -> (Decimal, Decimal) {
    let mut hasher = DefaultHasher::new();
    name.hash(&mut hasher);
    let hash = hasher.finish();

    (Decimal::from(hash % 40_000 + 5_000), Decimal::from(hash % 3_000))
}
