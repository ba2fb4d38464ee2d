use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::DownloadId;

use super::request::ListRequest;

/// A delivered list export available to the buyer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Download {
    pub id: DownloadId,
    pub title: String,
    pub date: DateTime<Utc>,
    pub format: String,
    pub size: String,
}

impl Download {
    /// Produce the export record for an approved request.
    ///
    /// TODO: replace the nominal size once the export pipeline reports real
    /// file sizes.
    pub fn for_request(request: &ListRequest, at: DateTime<Utc>) -> Self {
        Self {
            id: DownloadId::new(),
            title: request.title.clone(),
            date: at,
            format: "CSV".to_string(),
            size: "1.2 MB".to_string(),
        }
    }
}
