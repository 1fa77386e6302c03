//! Alert feed and its active-alert projections.

use gs_feed_model::{Alert, AlertCategory, FeedError, FeedResult, Severity};

#[derive(Debug, Clone, Default)]
pub struct AlertStore {
    alerts: Vec<Alert>,
}

impl AlertStore {
    pub fn new(alerts: Vec<Alert>) -> Self {
        Self { alerts }
    }

    /// Every alert, active or not, in catalog order.
    pub fn all(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    /// Alerts with `is_active` set, in catalog order.
    pub fn active_alerts(&self) -> Vec<&Alert> {
        self.alerts.iter().filter(|a| a.is_active).collect()
    }

    /// Active alerts whose category is one of `categories`.
    ///
    /// Pass [`AlertCategory::PUBLIC`] for the public-safe subset.
    pub fn active_by_category(&self, categories: &[AlertCategory]) -> Vec<&Alert> {
        self.alerts
            .iter()
            .filter(|a| a.is_active && categories.contains(&a.category))
            .collect()
    }

    /// Number of active alerts at exactly `severity`.
    pub fn count_by_severity(&self, severity: Severity) -> usize {
        self.alerts
            .iter()
            .filter(|a| a.is_active && a.severity == severity)
            .count()
    }

    pub fn by_id(&self, id: &str) -> FeedResult<&Alert> {
        self.alerts.iter().find(|a| a.id == id).ok_or_else(|| {
            tracing::debug!(alert_id = %id, "alert lookup missed");
            FeedError::not_found("alert", id)
        })
    }
}
