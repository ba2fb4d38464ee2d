//! Listing search and filter predicate.
//!
//! The predicate is a pure function over validated listings: no errors, no
//! I/O, no state. The catalog and the HTTP layer both run every visibility
//! decision through [`matches`].

use super::models::{FilterState, Listing, VolumeSelection};

/// Lower-cased concatenation of a listing's searchable fields.
///
/// Field order matters only for readability; matching is substring-based over
/// the whole haystack.
fn haystack(listing: &Listing) -> String {
    format!(
        "{} {} {} {} {} {} {}",
        listing.title,
        listing.description,
        listing.industry,
        listing.job_title,
        listing.seller.name,
        listing.list_type,
        listing.volume,
    )
    .to_lowercase()
}

/// Free-text search match: every whitespace-separated term of the query must
/// be a substring of the haystack. No tokenization, stemming, or ranking.
/// A blank query matches everything.
pub fn matches_search(listing: &Listing, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    let text = haystack(listing);
    query.split_whitespace().all(|term| text.contains(term))
}

/// Structured filter match: AND across fields, OR within each multi-select
/// field, empty selection meaning "no filter applied".
pub fn matches_filters(listing: &Listing, filters: &FilterState) -> bool {
    let matches_industry =
        filters.industries.is_empty() || filters.industries.contains(&listing.industry);
    let matches_job_title =
        filters.job_titles.is_empty() || filters.job_titles.contains(&listing.job_title);
    let matches_list_type =
        filters.list_types.is_empty() || filters.list_types.contains(&listing.list_type);
    let matches_volume = match filters.volume {
        VolumeSelection::Any => true,
        VolumeSelection::Bucket(bucket) => listing.volume == bucket,
    };
    let matches_verified = !filters.verified_sellers || listing.is_verified;
    let matches_price = filters
        .price_range
        .map_or(true, |range| range.contains(listing.price_cents));
    let matches_quality = filters
        .min_quality_score
        .map_or(true, |min| listing.stats.quality_score >= min);

    matches_industry
        && matches_job_title
        && matches_list_type
        && matches_volume
        && matches_verified
        && matches_price
        && matches_quality
}

/// Full visibility decision for one listing.
pub fn matches(listing: &Listing, query: &str, filters: &FilterState) -> bool {
    matches_search(listing, query) && matches_filters(listing, filters)
}

/// Run the predicate over a collection, keeping matches in input order.
pub fn apply(listings: &[Listing], query: &str, filters: &FilterState) -> Vec<Listing> {
    listings
        .iter()
        .filter(|listing| matches(listing, query, filters))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{ListingId, SellerId};
    use crate::domains::listings::models::{
        ListingMetadata, ListingStats, PriceRange, Seller, VolumeBucket,
    };

    fn listing(id: &str, title: &str, industry: &str, verified: bool) -> Listing {
        Listing {
            id: ListingId::from_string(id),
            title: title.to_string(),
            description: format!("{} description", title),
            industry: industry.to_string(),
            job_title: "C-Level".to_string(),
            volume: VolumeBucket::OneKToFiveK,
            list_type: "Email".to_string(),
            price_cents: 5000,
            is_verified: verified,
            seller: Seller {
                id: SellerId::from_string("seller1"),
                name: "DataPro Solutions".to_string(),
                rating: 4.8,
            },
            metadata: ListingMetadata {
                niche: industry.to_string(),
                source: "LinkedIn API".to_string(),
                freshness: "Updated Daily".to_string(),
                exclusivity_level: "Premium".to_string(),
            },
            stats: ListingStats {
                rating: 4.8,
                last_sold_count: 45,
                quality_score: 92,
                total_count: 1000,
                remaining_count: 5,
                last_updated: chrono::NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            },
            preview_records: Vec::new(),
        }
    }

    fn two_listing_set() -> Vec<Listing> {
        vec![
            listing("1", "Tech CEOs", "Technology", true),
            listing("2", "Healthcare List", "Healthcare", false),
        ]
    }

    #[test]
    fn empty_query_and_filters_match_everything() {
        let listings = two_listing_set();
        let visible = apply(&listings, "", &FilterState::default());
        assert_eq!(visible.len(), listings.len());
    }

    #[test]
    fn search_requires_every_term() {
        let subject = listing("1", "Tech CEOs", "Technology", true);
        // "tech" and "ceo" both appear (case-insensitively) in the haystack.
        assert!(matches_search(&subject, "tech ceo"));
        assert!(matches_search(&subject, "TECH"));
        // One present term plus one absent term must not match.
        assert!(!matches_search(&subject, "tech healthcare"));
    }

    #[test]
    fn search_covers_seller_name_type_and_volume() {
        let subject = listing("1", "Tech CEOs", "Technology", true);
        assert!(matches_search(&subject, "datapro"));
        assert!(matches_search(&subject, "email"));
        assert!(matches_search(&subject, "1000-5000"));
    }

    #[test]
    fn whitespace_only_query_matches() {
        let subject = listing("1", "Tech CEOs", "Technology", true);
        assert!(matches_search(&subject, "   "));
    }

    #[test]
    fn category_filter_is_or_within_field() {
        let subject = listing("1", "Finance Leaders", "Finance", true);
        let filters = FilterState {
            industries: vec!["Technology".to_string(), "Finance".to_string()],
            ..Default::default()
        };
        assert!(matches_filters(&subject, &filters));

        let excluded = FilterState {
            industries: vec!["Technology".to_string()],
            ..Default::default()
        };
        assert!(!matches_filters(&subject, &excluded));
    }

    #[test]
    fn filters_combine_with_and_across_fields() {
        let subject = listing("1", "Tech CEOs", "Technology", true);
        let filters = FilterState {
            industries: vec!["Technology".to_string()],
            job_titles: vec!["Manager".to_string()],
            ..Default::default()
        };
        // Industry matches but job title does not.
        assert!(!matches_filters(&subject, &filters));
    }

    #[test]
    fn volume_matches_exact_bucket_or_any() {
        let subject = listing("1", "Tech CEOs", "Technology", true);
        let any = FilterState::default();
        assert!(matches_filters(&subject, &any));

        let same_bucket = FilterState {
            volume: VolumeSelection::Bucket(VolumeBucket::OneKToFiveK),
            ..Default::default()
        };
        assert!(matches_filters(&subject, &same_bucket));

        let other_bucket = FilterState {
            volume: VolumeSelection::Bucket(VolumeBucket::TenKPlus),
            ..Default::default()
        };
        assert!(!matches_filters(&subject, &other_bucket));
    }

    #[test]
    fn verified_gate_excludes_unverified() {
        let listings = two_listing_set();
        let filters = FilterState {
            verified_sellers: true,
            ..Default::default()
        };
        let visible = apply(&listings, "", &filters);
        assert_eq!(visible.len(), 1);
        assert!(visible.iter().all(|l| l.is_verified));
    }

    #[test]
    fn price_range_and_quality_threshold() {
        let subject = listing("1", "Tech CEOs", "Technology", true);

        let in_range = FilterState {
            price_range: Some(PriceRange {
                min_cents: 1000,
                max_cents: 10000,
            }),
            ..Default::default()
        };
        assert!(matches_filters(&subject, &in_range));

        let out_of_range = FilterState {
            price_range: Some(PriceRange {
                min_cents: 10000,
                max_cents: 20000,
            }),
            ..Default::default()
        };
        assert!(!matches_filters(&subject, &out_of_range));

        let quality_ok = FilterState {
            min_quality_score: Some(90),
            ..Default::default()
        };
        assert!(matches_filters(&subject, &quality_ok));

        let quality_too_high = FilterState {
            min_quality_score: Some(93),
            ..Default::default()
        };
        assert!(!matches_filters(&subject, &quality_too_high));
    }

    #[test]
    fn filtering_is_idempotent() {
        let listings = two_listing_set();
        let filters = FilterState {
            industries: vec!["Technology".to_string()],
            verified_sellers: true,
            ..Default::default()
        };
        let once = apply(&listings, "tech", &filters);
        let twice = apply(&once, "tech", &filters);
        assert_eq!(
            once.iter().map(|l| l.id.clone()).collect::<Vec<_>>(),
            twice.iter().map(|l| l.id.clone()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn two_listing_scenario() {
        let listings = two_listing_set();

        // Query "tech", no other filters.
        let by_query = apply(&listings, "tech", &FilterState::default());
        assert_eq!(by_query.len(), 1);
        assert_eq!(by_query[0].title, "Tech CEOs");

        // Empty query, verified sellers only.
        let by_verified = apply(
            &listings,
            "",
            &FilterState {
                verified_sellers: true,
                ..Default::default()
            },
        );
        assert_eq!(by_verified.len(), 1);
        assert_eq!(by_verified[0].title, "Tech CEOs");

        // Empty query, no filters.
        let all = apply(&listings, "", &FilterState::default());
        assert_eq!(all.len(), 2);
    }
}
