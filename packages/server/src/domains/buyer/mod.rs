pub mod data;
pub mod models;

// Re-export commonly used types
pub use models::{
    Download, DownloadError, EnrichmentAddon, ListRequest, RequestStatus,
};
