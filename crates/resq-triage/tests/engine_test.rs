use std::sync::Arc;

use chrono::Utc;
use resq_core::config::DashboardConfig;
use resq_core::errors::{ResqError, StoreError};
use resq_core::models::{AlertStatus, EmergencyAlert, EmergencyType};
use resq_triage::{AlertFilter, DashboardStats, TriageEngine};
use test_fixtures::{alert, dashboard_alerts, FakeAlertStore, StoreCall, StoreOp};

async fn engine_with(
    alerts: Vec<EmergencyAlert>,
) -> (Arc<FakeAlertStore>, TriageEngine<FakeAlertStore>) {
    let store = Arc::new(FakeAlertStore::with_alerts(alerts));
    let engine = TriageEngine::new(store.clone());
    engine.refresh().await.unwrap();
    (store, engine)
}

// ── Refresh ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn refresh_replaces_snapshot() {
    let (store, engine) = engine_with(dashboard_alerts()).await;
    assert_eq!(engine.alerts().len(), 5);
    assert!(engine.refreshed_at().is_some());

    store.set_alerts(vec![alert("INC-NEW").build()]);
    assert_eq!(engine.refresh().await.unwrap(), 1);
    assert_eq!(engine.view(AlertFilter::All)[0].incident_id(), "INC-NEW");
}

#[tokio::test]
async fn failed_refresh_keeps_previous_snapshot() {
    let (store, engine) = engine_with(dashboard_alerts()).await;
    let before = engine.alerts();
    let stamp = engine.refreshed_at();

    store.set_alerts(Vec::new());
    store.fail(StoreOp::List);
    let err = engine.refresh().await.unwrap_err();

    assert!(matches!(err, ResqError::Store(StoreError::Unavailable { .. })));
    assert_eq!(engine.alerts(), before);
    assert_eq!(engine.refreshed_at(), stamp);
}

#[tokio::test]
async fn stats_count_the_snapshot() {
    let (_, engine) = engine_with(dashboard_alerts()).await;
    assert_eq!(
        engine.stats(),
        DashboardStats {
            total: 5,
            active: 4,
            critical: 2,
            in_progress: 1,
        }
    );
}

#[tokio::test]
async fn named_views_parse_filters() {
    let (_, engine) = engine_with(dashboard_alerts()).await;
    assert_eq!(engine.view_named("critical").unwrap().len(), 2);
    assert!(matches!(
        engine.view_named("newest"),
        Err(ResqError::InvalidFilter { .. })
    ));
}

#[test]
fn config_selects_default_filter() {
    let store = Arc::new(FakeAlertStore::new());
    let config = DashboardConfig {
        default_filter: "active".to_string(),
        ..DashboardConfig::default()
    };
    let engine = TriageEngine::from_config(store.clone(), &config).unwrap();
    assert_eq!(engine.default_filter(), AlertFilter::Active);

    let bad = DashboardConfig {
        default_filter: "loudest".to_string(),
        ..DashboardConfig::default()
    };
    assert!(TriageEngine::from_config(store, &bad).is_err());
}

// ── Status updates ───────────────────────────────────────────────────────

#[tokio::test]
async fn forward_update_reaches_store_and_snapshot() {
    let (store, engine) = engine_with(vec![alert("INC-1").build()]).await;
    let before = Utc::now();

    let status = engine.update_status("INC-1", "received").await.unwrap();

    assert_eq!(status, AlertStatus::Received);
    assert_eq!(store.alert("INC-1").unwrap().status, AlertStatus::Received);
    let local = engine.alert("INC-1").unwrap();
    assert_eq!(local.status, AlertStatus::Received);
    assert!(local.updated_at.unwrap() >= before);
}

#[tokio::test]
async fn skip_ahead_and_same_state_are_allowed() {
    let (_, engine) = engine_with(vec![alert("INC-1").build()]).await;

    engine.update_status("INC-1", "resolved").await.unwrap();
    engine.update_status("INC-1", "resolved").await.unwrap();
    assert_eq!(engine.alert("INC-1").unwrap().status, AlertStatus::Resolved);
    assert!(engine.view(AlertFilter::Active).is_empty());
}

#[tokio::test]
async fn unknown_status_fails_before_store_call() {
    let (store, engine) = engine_with(vec![alert("INC-1").build()]).await;
    let calls_before = store.call_count();

    for bogus in ["closed", "archived", "RESOLVED", ""] {
        let err = engine.update_status("INC-1", bogus).await.unwrap_err();
        assert!(matches!(err, ResqError::InvalidStatus { value } if value == bogus));
    }

    assert_eq!(store.call_count(), calls_before);
    assert_eq!(engine.alert("INC-1").unwrap().status, AlertStatus::Pending);
}

#[tokio::test]
async fn store_failure_leaves_snapshot_unchanged() {
    let (store, engine) = engine_with(vec![alert("INC-1").build()]).await;
    store.fail(StoreOp::UpdateStatus);

    let err = engine.update_status("INC-1", "in_progress").await.unwrap_err();

    assert!(err.is_recoverable());
    let local = engine.alert("INC-1").unwrap();
    assert_eq!(local.status, AlertStatus::Pending);
    assert_eq!(local.updated_at, None);
}

#[tokio::test]
async fn unknown_incident_is_not_found() {
    let (_, engine) = engine_with(Vec::new()).await;
    let err = engine.update_status("INC-404", "received").await.unwrap_err();
    assert!(matches!(err, ResqError::Store(StoreError::NotFound { .. })));
}

// ── Media ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn append_concatenates_in_order() {
    let (store, engine) = engine_with(vec![alert("INC-1").media(&["u1"]).build()]).await;

    let urls = engine
        .append_media("INC-1", vec!["u2".to_string(), "u3".to_string()])
        .await
        .unwrap();

    assert_eq!(urls, vec!["u1", "u2", "u3"]);
    assert_eq!(store.alert("INC-1").unwrap().media_urls, vec!["u1", "u2", "u3"]);
    assert_eq!(engine.alert("INC-1").unwrap().media_urls, vec!["u1", "u2", "u3"]);
    assert_eq!(
        store.ops()[1..],
        [StoreOp::GetMediaUrls, StoreOp::UpdateMediaUrls]
    );
}

#[tokio::test]
async fn append_reads_latest_store_list() {
    let (store, engine) = engine_with(vec![alert("INC-1").build()]).await;
    // Another client appended after our last refresh.
    store.set_alerts(vec![alert("INC-1").media(&["theirs"]).build()]);

    let urls = engine
        .append_media("INC-1", vec!["ours".to_string()])
        .await
        .unwrap();
    assert_eq!(urls, vec!["theirs", "ours"]);
}

#[tokio::test]
async fn empty_append_makes_no_store_call() {
    let (store, engine) = engine_with(vec![alert("INC-1").media(&["u1"]).build()]).await;
    let calls_before = store.call_count();

    let urls = engine.append_media("INC-1", Vec::new()).await.unwrap();

    assert_eq!(urls, vec!["u1"]);
    assert_eq!(store.call_count(), calls_before);
}

#[tokio::test]
async fn failed_media_write_leaves_snapshot_unchanged() {
    let (store, engine) = engine_with(vec![alert("INC-1").media(&["u1"]).build()]).await;
    store.fail(StoreOp::UpdateMediaUrls);

    assert!(engine
        .append_media("INC-1", vec!["u2".to_string()])
        .await
        .is_err());
    assert_eq!(engine.alert("INC-1").unwrap().media_urls, vec!["u1"]);
    assert!(matches!(
        store.calls().last(),
        Some(StoreCall::UpdateMediaUrls { urls, .. }) if urls == &vec!["u1".to_string(), "u2".to_string()]
    ));
}

#[tokio::test]
async fn contacts_come_from_the_store() {
    use resq_core::models::AuthorityContact;
    let contact = |id: &str, active: bool| AuthorityContact {
        id: id.to_string(),
        name: "Precinct 9".to_string(),
        phone_number: "+15550900".to_string(),
        email: "desk@precinct9.example".to_string(),
        department: "police".to_string(),
        is_active: active,
    };
    let store = Arc::new(
        FakeAlertStore::new().with_contacts(vec![contact("c1", true), contact("c2", false)]),
    );
    let engine = TriageEngine::new(store);
    let contacts = engine.authority_contacts().await.unwrap();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].id, "c1");
}

#[tokio::test]
async fn new_high_risk_alert_jumps_the_queue() {
    let (store, engine) = engine_with(dashboard_alerts()).await;
    let mut alerts = store.alerts();
    alerts.push(
        alert("INC-URGENT")
            .emergency_type(EmergencyType::DomesticViolence)
            .safe_to_call(false)
            .created_at(Utc::now())
            .build(),
    );
    store.set_alerts(alerts);
    engine.refresh().await.unwrap();

    assert_eq!(engine.view(AlertFilter::All)[0].incident_id(), "INC-URGENT");
}

// ── Refresh racing local writes ──────────────────────────────────────────

/// Store whose `list` answers with data read before a delay.
struct SlowList {
    inner: FakeAlertStore,
    delay: std::time::Duration,
}

impl resq_core::traits::IAlertStore for SlowList {
    async fn create(&self, alert: resq_core::NewAlert) -> resq_core::ResqResult<resq_core::AlertReceipt> {
        self.inner.create(alert).await
    }

    async fn list(&self) -> resq_core::ResqResult<Vec<EmergencyAlert>> {
        let alerts = self.inner.list().await;
        tokio::time::sleep(self.delay).await;
        alerts
    }

    async fn update_status(&self, incident_id: &str, status: AlertStatus) -> resq_core::ResqResult<()> {
        self.inner.update_status(incident_id, status).await
    }

    async fn update_media_urls(&self, incident_id: &str, urls: Vec<String>) -> resq_core::ResqResult<()> {
        self.inner.update_media_urls(incident_id, urls).await
    }

    async fn get_media_urls(&self, incident_id: &str) -> resq_core::ResqResult<Vec<String>> {
        self.inner.get_media_urls(incident_id).await
    }

    async fn list_authority_contacts(
        &self,
    ) -> resq_core::ResqResult<Vec<resq_core::AuthorityContact>> {
        self.inner.list_authority_contacts().await
    }
}

async fn slow_engine(alerts: Vec<EmergencyAlert>) -> (Arc<SlowList>, TriageEngine<SlowList>) {
    let store = Arc::new(SlowList {
        inner: FakeAlertStore::with_alerts(alerts),
        delay: std::time::Duration::from_millis(100),
    });
    let engine = TriageEngine::new(store.clone());
    engine.refresh().await.unwrap();
    (store, engine)
}

#[tokio::test(start_paused = true)]
async fn status_write_during_refresh_is_not_reverted() {
    let (store, engine) = slow_engine(vec![alert("INC-1").build()]).await;

    let (refreshed, updated) = tokio::join!(
        engine.refresh(),
        engine.update_status("INC-1", "resolved")
    );
    refreshed.unwrap();
    updated.unwrap();

    assert_eq!(store.inner.alert("INC-1").unwrap().status, AlertStatus::Resolved);
    assert_eq!(engine.alert("INC-1").unwrap().status, AlertStatus::Resolved);
    // The stale list was dropped and fetched again.
    let lists = store.inner.ops().iter().filter(|op| **op == StoreOp::List).count();
    assert_eq!(lists, 3);
}

#[tokio::test(start_paused = true)]
async fn media_write_during_refresh_is_not_reverted() {
    let (_, engine) = slow_engine(vec![alert("INC-1").media(&["u1"]).build()]).await;

    let (refreshed, appended) = tokio::join!(
        engine.refresh(),
        engine.append_media("INC-1", vec!["u2".to_string()])
    );
    refreshed.unwrap();
    appended.unwrap();

    assert_eq!(engine.alert("INC-1").unwrap().media_urls, vec!["u1", "u2"]);
}
