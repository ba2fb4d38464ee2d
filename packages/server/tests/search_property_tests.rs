//! Property tests for the filter predicate.

use chrono::NaiveDate;
use proptest::prelude::*;
use server_core::common::{ListingId, SellerId};
use server_core::domains::listings::models::{
    FilterState, Listing, ListingMetadata, ListingStats, PriceRange, Seller, VolumeBucket,
    VolumeSelection,
};
use server_core::domains::listings::search;

const INDUSTRIES: &[&str] = &["Technology", "Healthcare", "Finance", "Retail"];
const JOB_TITLES: &[&str] = &["C-Level", "VP/Director", "Manager", "Individual Contributor"];
const LIST_TYPES: &[&str] = &["Email", "LinkedIn", "Phone"];

fn arb_bucket() -> impl Strategy<Value = VolumeBucket> {
    prop_oneof![
        Just(VolumeBucket::ZeroToOneK),
        Just(VolumeBucket::OneKToFiveK),
        Just(VolumeBucket::FiveKToTenK),
        Just(VolumeBucket::TenKPlus),
    ]
}

fn arb_listing() -> impl Strategy<Value = Listing> {
    (
        "[a-z0-9]{1,12}",
        "[A-Za-z][A-Za-z ]{0,23}",
        proptest::sample::select(INDUSTRIES),
        proptest::sample::select(JOB_TITLES),
        arb_bucket(),
        proptest::sample::select(LIST_TYPES),
        0i64..100_000,
        any::<bool>(),
        0u8..=100,
    )
        .prop_map(
            |(
                id,
                title,
                industry,
                job_title,
                volume,
                list_type,
                price_cents,
                is_verified,
                quality_score,
            )| {
                Listing {
                    id: ListingId::from_string(id),
                    title: title.clone(),
                    description: format!("{} description", title),
                    industry: industry.to_string(),
                    job_title: job_title.to_string(),
                    volume,
                    list_type: list_type.to_string(),
                    price_cents,
                    is_verified,
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
                        quality_score,
                        total_count: 1000,
                        remaining_count: 5,
                        last_updated: NaiveDate::from_ymd_opt(2024, 3, 15)
                            .expect("valid fixture date"),
                    },
                    preview_records: Vec::new(),
                }
            },
        )
}

fn arb_filters() -> impl Strategy<Value = FilterState> {
    (
        proptest::sample::subsequence(INDUSTRIES.to_vec(), 0..=INDUSTRIES.len()),
        proptest::sample::subsequence(JOB_TITLES.to_vec(), 0..=JOB_TITLES.len()),
        proptest::sample::subsequence(LIST_TYPES.to_vec(), 0..=LIST_TYPES.len()),
        prop_oneof![
            Just(VolumeSelection::Any),
            arb_bucket().prop_map(VolumeSelection::Bucket),
        ],
        any::<bool>(),
        proptest::option::of((0i64..50_000).prop_map(|min_cents| PriceRange {
            min_cents,
            max_cents: min_cents + 50_000,
        })),
        proptest::option::of(0u8..=100),
    )
        .prop_map(
            |(
                industries,
                job_titles,
                list_types,
                volume,
                verified_sellers,
                price_range,
                min_quality_score,
            )| {
                FilterState {
                    industries: industries.into_iter().map(str::to_string).collect(),
                    job_titles: job_titles.into_iter().map(str::to_string).collect(),
                    list_types: list_types.into_iter().map(str::to_string).collect(),
                    volume,
                    verified_sellers,
                    price_range,
                    min_quality_score,
                }
            },
        )
}

fn ids(listings: &[Listing]) -> Vec<ListingId> {
    listings.iter().map(|l| l.id.clone()).collect()
}

proptest! {
    /// Filtering an already-filtered set with the same criteria is a no-op.
    #[test]
    fn filtering_is_idempotent(
        listings in proptest::collection::vec(arb_listing(), 0..20),
        query in "[a-z ]{0,12}",
        filters in arb_filters(),
    ) {
        let once = search::apply(&listings, &query, &filters);
        let twice = search::apply(&once, &query, &filters);
        prop_assert_eq!(ids(&once), ids(&twice));
    }

    /// With a blank query and no active criteria, every listing is visible.
    #[test]
    fn empty_criteria_are_the_identity(
        listings in proptest::collection::vec(arb_listing(), 0..20),
    ) {
        let visible = search::apply(&listings, "", &FilterState::default());
        prop_assert_eq!(ids(&listings), ids(&visible));
    }

    /// No unverified listing survives the verified-sellers gate, whatever the
    /// other criteria are.
    #[test]
    fn verified_gate_holds_under_any_other_filters(
        listings in proptest::collection::vec(arb_listing(), 0..20),
        query in "[a-z ]{0,12}",
        mut filters in arb_filters(),
    ) {
        filters.verified_sellers = true;
        let visible = search::apply(&listings, &query, &filters);
        prop_assert!(visible.iter().all(|l| l.is_verified));
    }

    /// The visible set is always a subset of the input, in input order.
    #[test]
    fn visible_set_is_an_ordered_subset(
        listings in proptest::collection::vec(arb_listing(), 0..20),
        query in "[a-z ]{0,12}",
        filters in arb_filters(),
    ) {
        let visible = search::apply(&listings, &query, &filters);
        let input_ids = ids(&listings);
        let mut cursor = 0usize;
        for id in ids(&visible) {
            let position = input_ids[cursor..]
                .iter()
                .position(|candidate| candidate == &id);
            prop_assert!(position.is_some());
            cursor += position.unwrap() + 1;
        }
    }

    /// Every term of a matching query appears in the listing's searchable
    /// text; dropping listings that miss a term is exactly AND-of-terms.
    #[test]
    fn matching_requires_every_term(
        listing in arb_listing(),
        extra in "[0-9]{4}",
    ) {
        // The title is alphabetic and the digit-only term cannot appear in
        // the haystack, so adding it must break the match.
        let matching_query = listing.title.to_lowercase();
        prop_assert!(search::matches_search(&listing, &matching_query));

        let broken_query = format!("{} x{}", matching_query, extra);
        prop_assert!(!search::matches_search(&listing, &broken_query));
    }
}
