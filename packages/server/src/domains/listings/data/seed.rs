//! Seed catalog.
//!
//! The marketplace ships with a built-in sample catalog; deployments can
//! point `SEED_PATH` at a JSON file instead. Either way every record passes
//! schema validation before it reaches the store.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::collections::HashSet;
use std::path::Path;

use crate::common::{ListingId, SellerId};
use crate::domains::listings::models::{
    Listing, ListingMetadata, ListingStats, PreviewRecord, Seller, VolumeBucket,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("seed dates are valid")
}

#[allow(clippy::too_many_arguments)]
fn listing(
    id: &str,
    title: &str,
    description: &str,
    industry: &str,
    job_title: &str,
    volume: VolumeBucket,
    list_type: &str,
    price_cents: i64,
    seller: (&str, &str, f64),
    source: &str,
    freshness: &str,
    stats: (f64, u32, u8, u32, u32, NaiveDate),
    preview: (&str, &str, &str, &str),
) -> Listing {
    let (seller_id, seller_name, seller_rating) = seller;
    let (rating, last_sold_count, quality_score, total_count, remaining_count, last_updated) =
        stats;
    let (name, preview_title, company, email) = preview;
    Listing {
        id: ListingId::from_string(id),
        title: title.to_string(),
        description: description.to_string(),
        industry: industry.to_string(),
        job_title: job_title.to_string(),
        volume,
        list_type: list_type.to_string(),
        price_cents,
        is_verified: true,
        seller: Seller {
            id: SellerId::from_string(seller_id),
            name: seller_name.to_string(),
            rating: seller_rating,
        },
        metadata: ListingMetadata {
            niche: industry.to_string(),
            source: source.to_string(),
            freshness: freshness.to_string(),
            exclusivity_level: "Premium".to_string(),
        },
        stats: ListingStats {
            rating,
            last_sold_count,
            quality_score,
            total_count,
            remaining_count,
            last_updated,
        },
        preview_records: vec![PreviewRecord {
            name: name.to_string(),
            title: preview_title.to_string(),
            company: company.to_string(),
            email: email.to_string(),
        }],
    }
}

/// The built-in sample catalog.
pub fn builtin_listings() -> Vec<Listing> {
    vec![
        listing(
            "1",
            "Instantly LinkedIn Company Followers",
            "Exclusive list of active LinkedIn company followers from high-growth tech companies. Perfect for targeted outreach and market expansion.",
            "Technology",
            "Individual Contributor",
            VolumeBucket::OneKToFiveK,
            "LinkedIn",
            5000,
            ("seller1", "DataPro Solutions", 4.8),
            "LinkedIn API",
            "Updated Daily",
            (4.8, 45, 92, 1000, 5, date(2024, 3, 15)),
            ("John Smith", "Growth Marketing Manager", "TechStart Inc", "john@techstart.com"),
        ),
        listing(
            "2",
            "Clay Slack Group Users",
            "Curated list of active users from exclusive Clay Slack communities. High-intent professionals actively engaged in sales and marketing discussions.",
            "Technology",
            "Individual Contributor",
            VolumeBucket::FiveKToTenK,
            "Email",
            10000,
            ("seller2", "MedData Inc", 4.5),
            "Slack API",
            "Updated Weekly",
            (4.5, 78, 88, 5000, 2, date(2024, 3, 10)),
            ("Sarah Johnson", "Sales Operations Manager", "Growth Co", "sarah@growthco.com"),
        ),
        listing(
            "3",
            "DC Tech Week Startups 2025",
            "Exclusive list of confirmed attendees and speakers from DC Tech Week 2025. Early access to decision-makers from the most promising startups.",
            "Technology",
            "C-Level",
            VolumeBucket::TenKPlus,
            "Email",
            4000,
            ("seller3", "FinanceLeads", 4.9),
            "Event Registration",
            "Updated Daily",
            (4.9, 120, 95, 2000, 10, date(2024, 3, 20)),
            ("Michael Chen", "Founder & CEO", "AI Startup", "mchen@aistartup.com"),
        ),
        listing(
            "4",
            "Smartlead Customers",
            "Exclusive list of active Smartlead customers. High-value prospects already using email automation tools.",
            "Technology",
            "VP/Director",
            VolumeBucket::ZeroToOneK,
            "Email",
            50900,
            ("seller4", "RetailData Co", 4.2),
            "Product Analytics",
            "Updated Daily",
            (4.2, 23, 85, 800, 4, date(2024, 3, 1)),
            ("Lisa Brown", "VP of Sales", "SaaS Co", "lisa@saasco.com"),
        ),
        listing(
            "5",
            "Slashdot Sales Tech Companies 2025",
            "Curated list of companies featured in Slashdot's 2025 Sales Tech Report. Early access to decision-makers at innovative sales technology companies.",
            "Technology",
            "C-Level",
            VolumeBucket::OneKToFiveK,
            "Email",
            10000,
            ("seller5", "IndustryLeads", 4.6),
            "Industry Reports",
            "Updated Weekly",
            (4.6, 56, 90, 3000, 15, date(2024, 3, 10)),
            ("David Wilson", "CTO", "SalesTech", "dwilson@salestech.com"),
        ),
        listing(
            "6",
            "Stripe Companies 2025",
            "Exclusive list of companies processing over $1M annually through Stripe. High-value prospects with proven payment processing needs.",
            "Technology",
            "C-Level",
            VolumeBucket::FiveKToTenK,
            "Email",
            20000,
            ("seller6", "EduData Solutions", 4.7),
            "Payment Processing",
            "Updated Daily",
            (4.7, 34, 89, 4000, 1, date(2024, 3, 10)),
            ("Robert Taylor", "CEO", "FinTech Startup", "rtaylor@fintech.com"),
        ),
    ]
}

/// Load and validate a listing catalog from a JSON seed file.
///
/// The file is a JSON array of listings in wire format. Every record must
/// pass schema validation and IDs must be unique; a bad record fails the
/// whole load rather than being silently dropped.
pub fn load_listings(path: impl AsRef<Path>) -> Result<Vec<Listing>> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;
    let listings: Vec<Listing> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse seed file {}", path.display()))?;

    let mut seen = HashSet::new();
    for listing in &listings {
        listing
            .validate()
            .with_context(|| format!("Invalid listing in seed file {}", path.display()))?;
        if !seen.insert(listing.id.clone()) {
            anyhow::bail!(
                "Duplicate listing id {} in seed file {}",
                listing.id,
                path.display()
            );
        }
    }

    Ok(listings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_catalog_has_unique_ids() {
        let listings = builtin_listings();
        let ids: HashSet<_> = listings.iter().map(|l| l.id.clone()).collect();
        assert_eq!(ids.len(), listings.len());
    }

    #[test]
    fn load_round_trips_builtin_catalog() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string_pretty(&builtin_listings()).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let loaded = load_listings(file.path()).unwrap();
        assert_eq!(loaded.len(), builtin_listings().len());
        assert_eq!(loaded[0].title, "Instantly LinkedIn Company Followers");
    }

    #[test]
    fn load_rejects_invalid_records() {
        let mut listings = builtin_listings();
        listings[0].stats.remaining_count = listings[0].stats.total_count + 1;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string(&listings).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        assert!(load_listings(file.path()).is_err());
    }

    #[test]
    fn load_rejects_duplicate_ids() {
        let mut listings = builtin_listings();
        let dup = listings[0].clone();
        listings.push(dup);

        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string(&listings).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        assert!(load_listings(file.path()).is_err());
    }

    #[test]
    fn load_rejects_missing_file() {
        assert!(load_listings("/definitely/not/here.json").is_err());
    }
}
