//! 供应商 logo 目录

use crate::domain::entities::LogoAssignment;

const WIKIMEDIA: &str = "https://upload.wikimedia.org/wikipedia/commons/thumb";

/// 按名称索引的 logo 地址
pub const VENDOR_LOGOS: &[(&str, &str)] = &[
    ("Amazon Web Services", "9/93/Amazon_Web_Services_Logo.svg/100px-Amazon_Web_Services_Logo.svg.png"),
    ("Google Workspace", "5/53/Google_%22G%22_Logo.svg/100px-Google_%22G%22_Logo.svg.png"),
    ("Slack", "d/d5/Slack_icon_2019.svg/100px-Slack_icon_2019.svg.png"),
    ("Stripe", "b/ba/Stripe_Logo%2C_revised_2016.svg/100px-Stripe_Logo%2C_revised_2016.svg.png"),
    ("Notion", "e/e9/Notion-logo.svg/100px-Notion-logo.svg.png"),
    ("Zoom", "1/11/Zoom_Logo_2022.svg/100px-Zoom_Logo_2022.svg.png"),
    ("Figma", "3/33/Figma-logo.svg/100px-Figma-logo.svg.png"),
    ("GitHub", "9/91/Octicons-mark-github.svg/100px-Octicons-mark-github.svg.png"),
    ("Atlassian", "https://wac-cdn.atlassian.com/assets/img/favicons/atlassian/favicon.png"),
    ("Jira", "8/8a/Jira_Logo.svg/100px-Jira_Logo.svg.png"),
    ("Confluence", "8/89/Confluence_Logo.svg/100px-Confluence_Logo.svg.png"),
    ("Datadog", "https://imgix.datadoghq.com/img/dd_logo_n_70x75.png"),
    ("New Relic", "https://newrelic.com/favicon.ico"),
    ("SendGrid", "https://sendgrid.com/favicon.ico"),
    ("Twilio", "7/7e/Twilio-logo-red.svg/100px-Twilio-logo-red.svg.png"),
    ("Snowflake", "f/ff/Snowflake_Logo.svg/100px-Snowflake_Logo.svg.png"),
    ("MongoDB", "9/93/MongoDB_Logo.svg/100px-MongoDB_Logo.svg.png"),
    ("Postman", "https://www.postman.com/favicon-32x32.png"),
    ("Sentry", "https://sentry.io/favicon.ico"),
    ("Cloudflare", "9/94/Cloudflare_Logo.png/100px-Cloudflare_Logo.png"),
    ("Heroku", "e/ec/Heroku_logo.svg/100px-Heroku_logo.svg.png"),
    ("DigitalOcean", "f/ff/DigitalOcean_logo.svg/100px-DigitalOcean_logo.svg.png"),
    ("Netlify", "https://www.netlify.com/favicon.ico"),
    ("Vercel", "https://vercel.com/favicon.ico"),
    ("OpenAI", "4/4d/OpenAI_Logo.svg/100px-OpenAI_Logo.svg.png"),
    ("Linear", "https://linear.app/favicon.ico"),
    ("Asana", "3/3b/Asana_logo.svg/100px-Asana_logo.svg.png"),
    ("Monday.com", "https://monday.com/favicon.ico"),
    ("HubSpot", "3/33/HubSpot_Logo.svg/100px-HubSpot_Logo.svg.png"),
    ("Salesforce", "f/f9/Salesforce.com_logo.svg/100px-Salesforce.com_logo.svg.png"),
];

/// 完整的 logo 地址，相对路径挂在 Wikimedia 缩略图目录下
pub fn logo_url(path: &str) -> String {
    if path.starts_with("https://") {
        path.to_string()
    } else {
        format!("{}/{}", WIKIMEDIA, path)
    }
}

/// 全部 logo 回填指令
pub fn logo_assignments() -> Vec<LogoAssignment> {
    VENDOR_LOGOS
        .iter()
        .map(|(name, path)| LogoAssignment::new(*name, logo_url(path)))
        .collect()
}
