//! Sample seller dashboard data.

use chrono::{DateTime, TimeZone, Utc};

use crate::domains::seller::models::{
    Earnings, Fulfillment, Payout, RatingBreakdown, SellerRating,
};

fn ts(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0)
        .single()
        .expect("seed timestamps are valid")
}

pub fn earnings() -> Earnings {
    Earnings {
        total_cents: 1_250_000,
        pending_cents: 42_500,
        last_payout: Payout {
            date: ts(2024, 2, 28, 12, 0),
            amount_cents: 85_000,
        },
    }
}

pub fn rating() -> SellerRating {
    SellerRating {
        average: 4.6,
        total: 142,
        breakdown: RatingBreakdown {
            five: 98,
            four: 31,
            three: 9,
            two: 3,
            one: 1,
        },
    }
}

pub fn fulfillment() -> Fulfillment {
    Fulfillment {
        pending: 4,
        completed: 87,
        rejected: 6,
    }
}
