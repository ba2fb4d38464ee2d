//! Integration tests for the buyer dashboard: requests, addon toggling, and
//! download gating.

use chrono::Utc;
use server_core::common::{AddonId, RequestId};
use server_core::domains::buyer::models::{Download, DownloadError, RequestStatus};
use server_core::kernel::{BaseBuyerStore, MemoryBuyerStore};

#[tokio::test]
async fn dashboard_seed_is_complete() {
    let store = MemoryBuyerStore::seeded();

    let requests = store.list_requests().await.unwrap();
    assert!(!requests.is_empty());
    assert!(requests
        .iter()
        .any(|r| r.status == RequestStatus::Approved));

    let addons = store.addons().await.unwrap();
    assert_eq!(addons.len(), 6);
    assert!(addons.iter().all(|a| !a.selected));

    assert!(!store.downloads().await.unwrap().is_empty());
}

#[tokio::test]
async fn toggling_twice_restores_the_addon() {
    let store = MemoryBuyerStore::seeded();
    let id = AddonId::from_string("geographic");

    let on = store.toggle_addon(&id).await.unwrap().unwrap();
    assert!(on.selected);
    let off = store.toggle_addon(&id).await.unwrap().unwrap();
    assert!(!off.selected);
}

#[tokio::test]
async fn approved_request_produces_a_download() {
    let store = MemoryBuyerStore::seeded();
    let approved = store
        .list_requests()
        .await
        .unwrap()
        .into_iter()
        .find(|r| r.status == RequestStatus::Approved)
        .expect("seed has an approved request");

    approved.ensure_downloadable().unwrap();
    let before = store.downloads().await.unwrap().len();

    let download = store
        .add_download(Download::for_request(&approved, Utc::now()))
        .await
        .unwrap();
    assert_eq!(download.title, approved.title);
    assert_eq!(download.format, "CSV");

    let after = store.downloads().await.unwrap();
    assert_eq!(after.len(), before + 1);
    assert!(after.iter().any(|d| d.id == download.id));
}

#[tokio::test]
async fn unapproved_requests_are_not_downloadable() {
    let store = MemoryBuyerStore::seeded();
    let requests = store.list_requests().await.unwrap();

    for request in requests
        .iter()
        .filter(|r| r.status != RequestStatus::Approved)
    {
        assert!(matches!(
            request.ensure_downloadable(),
            Err(DownloadError::NotApproved { .. })
        ));
    }

    let missing = RequestId::from_string("no-such-request");
    assert!(store.find_request(&missing).await.unwrap().is_none());
}
