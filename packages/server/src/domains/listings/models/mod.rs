pub mod filter;
pub mod listing;

pub use filter::*;
pub use listing::*;
