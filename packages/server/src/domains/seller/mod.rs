pub mod data;
pub mod models;

// Re-export commonly used types
pub use models::{Earnings, Fulfillment, Payout, PayoutError, RatingBreakdown, SellerRating};
