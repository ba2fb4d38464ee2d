use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::common::RequestId;

/// A buyer's purchase request for a list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRequest {
    pub id: RequestId,
    pub title: String,
    pub status: RequestStatus,
    pub date: DateTime<Utc>,
    pub seller: String,
    pub price_cents: i64,
}

/// Request status enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestStatus::Pending => write!(f, "pending"),
            RequestStatus::Approved => write!(f, "approved"),
            RequestStatus::Rejected => write!(f, "rejected"),
        }
    }
}

impl std::str::FromStr for RequestStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "pending" => Ok(RequestStatus::Pending),
            "approved" => Ok(RequestStatus::Approved),
            "rejected" => Ok(RequestStatus::Rejected),
            _ => Err(anyhow::anyhow!("Invalid request status: {}", s)),
        }
    }
}

/// Failure modes of the download operation.
#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("request {0} not found")]
    RequestNotFound(RequestId),

    #[error("request {id} is not approved (status: {status})")]
    NotApproved { id: RequestId, status: RequestStatus },

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ListRequest {
    /// Ensure the request is approved (downloads require approval).
    pub fn ensure_downloadable(&self) -> Result<(), DownloadError> {
        match self.status {
            RequestStatus::Approved => Ok(()),
            status => Err(DownloadError::NotApproved {
                id: self.id.clone(),
                status,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(status: RequestStatus) -> ListRequest {
        ListRequest {
            id: RequestId::from_string("req1"),
            title: "Tech CEOs 2024".to_string(),
            status,
            date: Utc::now(),
            seller: "DataPro Solutions".to_string(),
            price_cents: 29999,
        }
    }

    #[test]
    fn only_approved_requests_are_downloadable() {
        assert!(request(RequestStatus::Approved).ensure_downloadable().is_ok());
        assert!(matches!(
            request(RequestStatus::Pending).ensure_downloadable(),
            Err(DownloadError::NotApproved { .. })
        ));
        assert!(matches!(
            request(RequestStatus::Rejected).ensure_downloadable(),
            Err(DownloadError::NotApproved { .. })
        ));
    }

    #[test]
    fn status_round_trips_wire_format() {
        for (status, text) in [
            (RequestStatus::Pending, "pending"),
            (RequestStatus::Approved, "approved"),
            (RequestStatus::Rejected, "rejected"),
        ] {
            assert_eq!(status.to_string(), text);
            assert_eq!(text.parse::<RequestStatus>().unwrap(), status);
        }
        assert!("shipped".parse::<RequestStatus>().is_err());
    }
}
