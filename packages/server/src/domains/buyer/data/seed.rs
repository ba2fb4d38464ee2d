//! Sample buyer dashboard data.

use chrono::{DateTime, TimeZone, Utc};

use crate::common::{AddonId, DownloadId, RequestId};
use crate::domains::buyer::models::{Download, EnrichmentAddon, ListRequest, RequestStatus};

fn ts(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0)
        .single()
        .expect("seed timestamps are valid")
}

pub fn list_requests() -> Vec<ListRequest> {
    vec![
        ListRequest {
            id: RequestId::from_string("req1"),
            title: "Tech CEOs 2024".to_string(),
            status: RequestStatus::Approved,
            date: ts(2024, 3, 15, 10, 0),
            seller: "DataPro Solutions".to_string(),
            price_cents: 29999,
        },
        ListRequest {
            id: RequestId::from_string("req2"),
            title: "Startup Founders Q1".to_string(),
            status: RequestStatus::Pending,
            date: ts(2024, 3, 18, 14, 30),
            seller: "IndustryLeads".to_string(),
            price_cents: 19999,
        },
        ListRequest {
            id: RequestId::from_string("req3"),
            title: "Healthcare Decision Makers".to_string(),
            status: RequestStatus::Rejected,
            date: ts(2024, 3, 12, 9, 15),
            seller: "MedData Inc".to_string(),
            price_cents: 24999,
        },
    ]
}

pub fn enrichment_addons() -> Vec<EnrichmentAddon> {
    let addon = |id: &str, name: &str, description: &str, price_cents: i64| EnrichmentAddon {
        id: AddonId::from_string(id),
        name: name.to_string(),
        description: description.to_string(),
        price_cents,
        selected: false,
    };
    vec![
        addon(
            "company-normalization",
            "Company Name Normalization",
            "Standardize company names and identify subsidiaries",
            5,
        ),
        addon(
            "industry-identification",
            "Industry Classification",
            "AI-powered industry categorization and sub-industry mapping",
            8,
        ),
        addon(
            "target-customer",
            "Target Customer Profile",
            "Identify ideal customer profiles and buying signals",
            12,
        ),
        addon(
            "company-size",
            "Company Size & Growth",
            "Employee count, revenue range, and growth metrics",
            7,
        ),
        addon(
            "geographic",
            "Geographic Enrichment",
            "HQ location, regional presence, and market coverage",
            6,
        ),
        addon(
            "tech-stack",
            "Technology Stack",
            "Identify technologies and tools used by the company",
            10,
        ),
    ]
}

pub fn downloads() -> Vec<Download> {
    vec![Download {
        id: DownloadId::from_string("dl1"),
        title: "Tech CEOs 2024".to_string(),
        date: ts(2024, 3, 16, 8, 45),
        format: "CSV".to_string(),
        size: "2.4 MB".to_string(),
    }]
}
