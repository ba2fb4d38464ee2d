use serde::{Deserialize, Serialize};

/// Request fulfillment counters shown on the seller dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fulfillment {
    pub pending: u32,
    pub completed: u32,
    pub rejected: u32,
}
