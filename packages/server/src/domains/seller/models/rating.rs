use serde::{Deserialize, Serialize};

/// Star-count histogram of a seller's reviews.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingBreakdown {
    pub five: u32,
    pub four: u32,
    pub three: u32,
    pub two: u32,
    pub one: u32,
}

impl RatingBreakdown {
    pub fn total(&self) -> u32 {
        self.five + self.four + self.three + self.two + self.one
    }
}

/// Aggregate seller rating shown on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerRating {
    pub average: f64,
    pub total: u32,
    pub breakdown: RatingBreakdown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakdown_total_sums_all_buckets() {
        let breakdown = RatingBreakdown {
            five: 98,
            four: 31,
            three: 9,
            two: 3,
            one: 1,
        };
        assert_eq!(breakdown.total(), 142);
    }
}
