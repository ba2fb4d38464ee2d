use serde::{Deserialize, Serialize};

use super::listing::VolumeBucket;

/// User-selected filter criteria narrowing visible listings.
///
/// Multi-select fields are OR-within-field and AND-across-fields; an empty
/// selection means the field is unfiltered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    #[serde(default)]
    pub industries: Vec<String>,
    #[serde(default)]
    pub job_titles: Vec<String>,
    #[serde(default)]
    pub list_types: Vec<String>,
    #[serde(default)]
    pub volume: VolumeSelection,
    #[serde(default)]
    pub verified_sellers: bool,
    /// Inclusive price window in cents; `None` leaves price unfiltered.
    #[serde(default)]
    pub price_range: Option<PriceRange>,
    /// Minimum acceptable quality score; `None` leaves quality unfiltered.
    #[serde(default)]
    pub min_quality_score: Option<u8>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            industries: Vec::new(),
            job_titles: Vec::new(),
            list_types: Vec::new(),
            volume: VolumeSelection::Any,
            verified_sellers: false,
            price_range: None,
            min_quality_score: None,
        }
    }
}

impl FilterState {
    /// True when no criterion is active, i.e. every listing matches.
    pub fn is_empty(&self) -> bool {
        self.industries.is_empty()
            && self.job_titles.is_empty()
            && self.list_types.is_empty()
            && self.volume == VolumeSelection::Any
            && !self.verified_sellers
            && self.price_range.is_none()
            && self.min_quality_score.is_none()
    }
}

/// Volume filter: the `"any"` sentinel or one exact bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum VolumeSelection {
    #[default]
    Any,
    Bucket(VolumeBucket),
}

impl std::fmt::Display for VolumeSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VolumeSelection::Any => write!(f, "any"),
            VolumeSelection::Bucket(bucket) => write!(f, "{}", bucket),
        }
    }
}

impl std::str::FromStr for VolumeSelection {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        // The empty string is what an untouched filter panel submits.
        if s.is_empty() || s == "any" {
            return Ok(VolumeSelection::Any);
        }
        Ok(VolumeSelection::Bucket(s.parse()?))
    }
}

impl TryFrom<String> for VolumeSelection {
    type Error = anyhow::Error;

    fn try_from(s: String) -> anyhow::Result<Self> {
        s.parse()
    }
}

impl From<VolumeSelection> for String {
    fn from(v: VolumeSelection) -> String {
        v.to_string()
    }
}

/// Inclusive price window in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRange {
    pub min_cents: i64,
    pub max_cents: i64,
}

impl PriceRange {
    pub fn contains(&self, price_cents: i64) -> bool {
        price_cents >= self.min_cents && price_cents <= self.max_cents
    }
}
