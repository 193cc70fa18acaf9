//! TriageEngine: the authority dashboard's view of the Alert Store.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::Instrument;

use resq_core::config::DashboardConfig;
use resq_core::errors::ResqResult;
use resq_core::models::{AlertStatus, AuthorityContact, EmergencyAlert};
use resq_core::traits::IAlertStore;
use resq_observability::{media_append_span, refresh_span, status_update_span};

use crate::filter::AlertFilter;
use crate::lifecycle::{parse_status, StatusTransition, TransitionKind};
use crate::media::append_media_urls;
use crate::stats::DashboardStats;
use crate::view::TriagedAlert;

#[derive(Debug, Default)]
struct Snapshot {
    alerts: Vec<EmergencyAlert>,
    refreshed_at: Option<DateTime<Utc>>,
    /// Bumped by every local write the store accepted.
    generation: u64,
}

/// Fetches attempted before a refresh gives up on racing local writes.
const REFRESH_ATTEMPTS: usize = 3;

/// Holds the latest alert list fetched from the store and routes status and
/// media updates back to it.
///
/// The local snapshot only changes after the store accepted a write, so a
/// failed call leaves every view exactly as it was.
pub struct TriageEngine<S: IAlertStore> {
    store: Arc<S>,
    snapshot: RwLock<Snapshot>,
    default_filter: AlertFilter,
    poll_interval: Duration,
}

impl<S: IAlertStore> TriageEngine<S> {
    pub fn new(store: Arc<S>) -> Self {
        let defaults = DashboardConfig::default();
        Self {
            store,
            snapshot: RwLock::new(Snapshot::default()),
            default_filter: AlertFilter::All,
            poll_interval: defaults.poll_interval(),
        }
    }

    pub fn from_config(store: Arc<S>, config: &DashboardConfig) -> ResqResult<Self> {
        Ok(Self {
            default_filter: config.default_filter.parse()?,
            poll_interval: config.poll_interval(),
            ..Self::new(store)
        })
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    pub fn default_filter(&self) -> AlertFilter {
        self.default_filter
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    /// Replace the snapshot with the store's current list.
    ///
    /// On failure the previous snapshot is kept and the error returned.
    /// A list fetched while a status or media write landed may predate that
    /// write; it is dropped and fetched again. If writes keep landing, the
    /// current snapshot is kept as is.
    pub async fn refresh(&self) -> ResqResult<usize> {
        async {
            for attempt in 1..=REFRESH_ATTEMPTS {
                let generation = self.read().generation;
                let alerts = self.store.list().await.inspect_err(|e| {
                    tracing::warn!(error = %e, "refresh failed, keeping previous snapshot");
                })?;

                let mut snapshot = self.write();
                if snapshot.generation != generation {
                    tracing::debug!(attempt, "local write during refresh, refetching");
                    continue;
                }
                let count = alerts.len();
                snapshot.alerts = alerts;
                snapshot.refreshed_at = Some(Utc::now());
                tracing::debug!(count, "snapshot refreshed");
                return Ok(count);
            }
            let count = self.read().alerts.len();
            tracing::info!(count, "refresh kept local snapshot under concurrent writes");
            Ok(count)
        }
        .instrument(refresh_span!())
        .await
    }

    /// When the snapshot was last replaced, if ever.
    pub fn refreshed_at(&self) -> Option<DateTime<Utc>> {
        self.read().refreshed_at
    }

    /// Raw snapshot, in store order.
    pub fn alerts(&self) -> Vec<EmergencyAlert> {
        self.read().alerts.clone()
    }

    pub fn alert(&self, incident_id: &str) -> Option<EmergencyAlert> {
        self.read()
            .alerts
            .iter()
            .find(|a| a.incident_id == incident_id)
            .cloned()
    }

    /// Snapshot filtered and in dashboard order.
    pub fn view(&self, filter: AlertFilter) -> Vec<TriagedAlert> {
        filter.apply(&self.read().alerts)
    }

    /// `view` for a filter given by name.
    pub fn view_named(&self, filter: &str) -> ResqResult<Vec<TriagedAlert>> {
        Ok(self.view(filter.parse()?))
    }

    pub fn stats(&self) -> DashboardStats {
        DashboardStats::from_alerts(&self.read().alerts)
    }

    /// Write `new_status` for an incident.
    ///
    /// The value must name one of the four statuses; anything else fails with
    /// `InvalidStatus` before the store is contacted.
    pub async fn update_status(&self, incident_id: &str, new_status: &str) -> ResqResult<AlertStatus> {
        let status = parse_status(new_status)?;
        self.set_status(incident_id, status).await?;
        Ok(status)
    }

    /// Typed form of [`update_status`](Self::update_status).
    pub async fn set_status(&self, incident_id: &str, status: AlertStatus) -> ResqResult<()> {
        async {
            if let Some(current) = self.alert(incident_id) {
                let transition = StatusTransition::new(current.status, status);
                match transition.kind() {
                    TransitionKind::Forward => {}
                    kind => tracing::info!(from = %current.status, ?kind, "non-sequential status change"),
                }
            }

            self.store
                .update_status(incident_id, status)
                .await
                .inspect_err(|e| tracing::warn!(error = %e, "status update rejected"))?;

            let now = Utc::now();
            self.modify(incident_id, |alert| {
                alert.status = status;
                alert.updated_at = Some(now);
            });
            tracing::info!("status updated");
            Ok(())
        }
        .instrument(status_update_span!(incident_id, status))
        .await
    }

    /// Append media URLs to an incident and return the full new list.
    ///
    /// See [`append_media_urls`]. An empty `urls` makes no store call and
    /// returns the snapshot's current list.
    pub async fn append_media(&self, incident_id: &str, urls: Vec<String>) -> ResqResult<Vec<String>> {
        if urls.is_empty() {
            tracing::debug!(incident_id, "nothing to append");
            return Ok(self
                .alert(incident_id)
                .map(|a| a.media_urls)
                .unwrap_or_default());
        }

        let added = urls.len();
        async {
            let combined = append_media_urls(self.store.as_ref(), incident_id, urls).await?;
            self.modify(incident_id, |alert| alert.media_urls = combined.clone());
            tracing::info!(total = combined.len(), "media appended");
            Ok(combined)
        }
        .instrument(media_append_span!(incident_id, added))
        .await
    }

    pub async fn authority_contacts(&self) -> ResqResult<Vec<AuthorityContact>> {
        self.store.list_authority_contacts().await
    }

    fn modify(&self, incident_id: &str, f: impl FnOnce(&mut EmergencyAlert)) {
        let mut snapshot = self.write();
        snapshot.generation += 1;
        match snapshot
            .alerts
            .iter_mut()
            .find(|a| a.incident_id == incident_id)
        {
            Some(alert) => f(alert),
            None => tracing::debug!(incident_id, "updated alert not in snapshot yet"),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Snapshot> {
        self.snapshot.read().unwrap_or_else(|p| p.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Snapshot> {
        self.snapshot.write().unwrap_or_else(|p| p.into_inner())
    }
}

impl<S: IAlertStore> std::fmt::Debug for TriageEngine<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let snapshot = self.read();
        f.debug_struct("TriageEngine")
            .field("alerts", &snapshot.alerts.len())
            .field("refreshed_at", &snapshot.refreshed_at)
            .field("default_filter", &self.default_filter)
            .finish()
    }
}
