use serde::{Deserialize, Serialize};

use crate::common::AddonId;

/// A per-lead enrichment the buyer can attach to purchases.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichmentAddon {
    pub id: AddonId,
    pub name: String,
    pub description: String,
    /// Price per enriched lead, in cents.
    pub price_cents: i64,
    pub selected: bool,
}

impl EnrichmentAddon {
    pub fn toggle(&mut self) {
        self.selected = !self.selected;
    }

    /// Cost of applying this addon to `lead_count` leads, in cents.
    pub fn cost_for(&self, lead_count: u32) -> i64 {
        self.price_cents * i64::from(lead_count)
    }
}
