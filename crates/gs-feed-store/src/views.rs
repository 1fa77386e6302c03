//! Derived views: pure projections over a [`FeedSnapshot`].
//!
//! Every function recomputes from the full snapshot on each call. UI
//! selection state is passed in explicitly via [`Selection`].

use chrono::{DateTime, Utc};
use serde::Serialize;

use gs_feed_model::{
    AQI_ALERT_LEVEL, Alert, AlertCategory, AqiReading, AqiStatus, CityEvent, CongestionBand,
    EmergencyVehicle, EventStatus, FeedResult, Junction, PollutantReading, Severity, SignalPhase,
    TrafficPrediction, TrafficStats, VehicleClass, VehicleStatus, format_time_ago,
};

use crate::fleet::EmergencyFleetStore;
use crate::junctions::JunctionStatusStore;
use crate::snapshot::FeedSnapshot;

// ── Selection ─────────────────────────────────────────────────

/// Caller-held UI selection (map pin, vehicle card).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub junction_id: Option<String>,
    pub vehicle_id: Option<String>,
}

impl Selection {
    pub fn junction(id: impl Into<String>) -> Self {
        Self {
            junction_id: Some(id.into()),
            vehicle_id: None,
        }
    }

    pub fn vehicle(id: impl Into<String>) -> Self {
        Self {
            junction_id: None,
            vehicle_id: Some(id.into()),
        }
    }
}

/// Resolve the selected vehicle. `Ok(None)` when nothing is selected;
/// NotFound when the selection points at a vehicle no longer in the fleet.
pub fn selected_vehicle<'a>(
    fleet: &'a EmergencyFleetStore,
    selection: &Selection,
) -> FeedResult<Option<&'a EmergencyVehicle>> {
    selection
        .vehicle_id
        .as_deref()
        .map(|id| fleet.by_id(id))
        .transpose()
}

/// Resolve the selected junction, with the same contract as [`selected_vehicle`].
pub fn selected_junction<'a>(
    junctions: &'a JunctionStatusStore,
    selection: &Selection,
) -> FeedResult<Option<&'a Junction>> {
    selection
        .junction_id
        .as_deref()
        .map(|id| junctions.by_id(id))
        .transpose()
}

// ── Row summaries ─────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct JunctionSummary<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub status: SignalPhase,
    pub congestion_level: u8,
    pub band: CongestionBand,
    pub wait_time: u32,
}

impl<'a> From<&'a Junction> for JunctionSummary<'a> {
    fn from(j: &'a Junction) -> Self {
        Self {
            id: &j.id,
            name: &j.name,
            status: j.status,
            congestion_level: j.congestion_level,
            band: j.congestion_band(),
            wait_time: j.wait_time,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AlertSummary<'a> {
    pub id: &'a str,
    #[serde(rename = "type")]
    pub category: AlertCategory,
    pub severity: Severity,
    pub highlighted: bool,
    pub title: &'a str,
    pub description: &'a str,
    pub location: &'a str,
    /// Relative age, e.g. "5m ago".
    pub age: String,
}

impl<'a> AlertSummary<'a> {
    pub fn new(alert: &'a Alert, now: DateTime<Utc>) -> Self {
        Self {
            id: &alert.id,
            category: alert.category,
            severity: alert.severity,
            highlighted: alert.severity.is_highlighted(),
            title: &alert.title,
            description: &alert.description,
            location: &alert.location,
            age: format_time_ago(alert.timestamp, now),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ResponseSummary<'a> {
    pub id: &'a str,
    pub call_sign: &'a str,
    #[serde(rename = "type")]
    pub class: VehicleClass,
    pub status: VehicleStatus,
    pub status_label: &'static str,
    pub eta: String,
    pub priority: u32,
    pub green_corridor: bool,
}

impl<'a> From<&'a EmergencyVehicle> for ResponseSummary<'a> {
    fn from(v: &'a EmergencyVehicle) -> Self {
        Self {
            id: &v.id,
            call_sign: &v.call_sign,
            class: v.class,
            status: v.status,
            status_label: v.status.label(),
            eta: v.eta_label(),
            priority: v.priority,
            green_corridor: v.green_corridor_active(),
        }
    }
}

/// AQI with its status re-derived from the index.
#[derive(Debug, Clone, Serialize)]
pub struct AqiSummary {
    pub index: u32,
    pub status: AqiStatus,
    pub label: &'static str,
    pub exceeds_alert_level: bool,
    pub pollutants: [PollutantReading; 5],
    pub last_updated: DateTime<Utc>,
}

impl AqiSummary {
    /// Summarize `r`, badging it when the index is above `alert_level`.
    pub fn new(r: &AqiReading, alert_level: u32) -> Self {
        Self {
            index: r.current,
            status: r.status(),
            label: r.label(),
            exceeds_alert_level: r.exceeds(alert_level),
            pollutants: r.pollutants(),
            last_updated: r.last_updated,
        }
    }
}

impl From<&AqiReading> for AqiSummary {
    fn from(r: &AqiReading) -> Self {
        Self::new(r, AQI_ALERT_LEVEL)
    }
}

/// A forecast horizon, flagged when it is worse than the one before it.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionPoint<'a> {
    pub time: &'a str,
    pub congestion_level: u8,
    pub confidence: u8,
    pub rising: bool,
}

pub fn prediction_trend(predictions: &[TrafficPrediction]) -> Vec<PredictionPoint<'_>> {
    predictions
        .iter()
        .enumerate()
        .map(|(i, p)| PredictionPoint {
            time: &p.time,
            congestion_level: p.congestion_level,
            confidence: p.confidence,
            rising: i > 0 && p.congestion_level > predictions[i - 1].congestion_level,
        })
        .collect()
}

pub fn upcoming_events(events: &[CityEvent]) -> Vec<&CityEvent> {
    events
        .iter()
        .filter(|e| e.status == EventStatus::Upcoming)
        .collect()
}

// ── Screens ───────────────────────────────────────────────────

/// What the public-facing page shows. Sensitive alert categories are
/// never included.
#[derive(Debug, Clone, Serialize)]
pub struct PublicView<'a> {
    pub top_congested: Vec<JunctionSummary<'a>>,
    pub alert_count: usize,
    pub alerts: Vec<AlertSummary<'a>>,
    pub aqi: AqiSummary,
}

pub fn public_view(snapshot: &FeedSnapshot, top_n: usize, now: DateTime<Utc>) -> PublicView<'_> {
    let alerts: Vec<AlertSummary<'_>> = snapshot
        .alerts
        .active_by_category(&AlertCategory::PUBLIC)
        .into_iter()
        .map(|a| AlertSummary::new(a, now))
        .collect();

    PublicView {
        top_congested: snapshot
            .junctions
            .top_congested(top_n)
            .into_iter()
            .map(JunctionSummary::from)
            .collect(),
        alert_count: alerts.len(),
        alerts,
        aqi: AqiSummary::from(&snapshot.aqi),
    }
}

/// The operator dashboard: every active alert, the fleet, and the junctions
/// over the warning threshold.
#[derive(Debug, Clone, Serialize)]
pub struct OperatorView<'a> {
    pub active_alert_count: usize,
    pub critical_count: usize,
    pub alerts: Vec<AlertSummary<'a>>,
    pub vehicle_count: usize,
    pub active_response_count: usize,
    pub responses: Vec<ResponseSummary<'a>>,
    pub congestion_warning_pct: u8,
    pub congested: Vec<JunctionSummary<'a>>,
    pub red_signals: usize,
    pub aqi: AqiSummary,
    pub stats: &'a TrafficStats,
    pub predictions: Vec<PredictionPoint<'a>>,
    pub upcoming_events: Vec<&'a CityEvent>,
}

pub fn operator_view(
    snapshot: &FeedSnapshot,
    now: DateTime<Utc>,
    congestion_warning_pct: u8,
    aqi_alert_level: u32,
) -> OperatorView<'_> {
    let alerts: Vec<AlertSummary<'_>> = snapshot
        .alerts
        .active_alerts()
        .into_iter()
        .map(|a| AlertSummary::new(a, now))
        .collect();
    let responses: Vec<ResponseSummary<'_>> = snapshot
        .fleet
        .active_responses()
        .into_iter()
        .map(ResponseSummary::from)
        .collect();

    OperatorView {
        active_alert_count: alerts.len(),
        critical_count: snapshot.alerts.count_by_severity(Severity::Critical),
        alerts,
        vehicle_count: snapshot.fleet.len(),
        active_response_count: responses.len(),
        responses,
        congestion_warning_pct,
        congested: snapshot
            .junctions
            .above_threshold(congestion_warning_pct)
            .into_iter()
            .map(JunctionSummary::from)
            .collect(),
        red_signals: snapshot.junctions.count_by_phase(SignalPhase::Red),
        aqi: AqiSummary::new(&snapshot.aqi, aqi_alert_level),
        stats: &snapshot.stats,
        predictions: prediction_trend(&snapshot.predictions),
        upcoming_events: upcoming_events(&snapshot.events),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Catalog;
    use chrono::TimeZone;
    use gs_feed_model::FeedError;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 9, 17, 12, 0, 0).unwrap()
    }

    fn snapshot() -> FeedSnapshot {
        Catalog::pune(now()).snapshot(now())
    }

    #[test]
    fn public_view_top_five_and_safe_alerts() {
        let snap = snapshot();
        let view = public_view(&snap, 5, now());
        let ids: Vec<&str> = view.top_congested.iter().map(|j| j.id).collect();
        assert_eq!(ids, ["j1", "j2", "j5", "j14", "j8"]);

        let alert_ids: Vec<&str> = view.alerts.iter().map(|a| a.id).collect();
        assert_eq!(alert_ids, ["a1", "a2", "a5", "a8"]);
        assert_eq!(view.alert_count, 4);
        assert_eq!(view.aqi.index, 118);
    }

    #[test]
    fn operator_view_counts() {
        let snap = snapshot();
        let view = operator_view(&snap, now(), 80, AQI_ALERT_LEVEL);
        assert_eq!(view.active_alert_count, 8);
        assert_eq!(view.critical_count, 2);
        assert_eq!(view.vehicle_count, 5);
        assert_eq!(view.active_response_count, 3);
        assert_eq!(view.red_signals, 5);

        let congested: Vec<&str> = view.congested.iter().map(|j| j.id).collect();
        assert_eq!(congested, ["j1", "j2", "j5", "j14"]);
        assert_eq!(view.upcoming_events.len(), 4);
    }

    #[test]
    fn operator_aqi_badge_follows_level() {
        let snap = snapshot();
        assert!(!operator_view(&snap, now(), 80, AQI_ALERT_LEVEL).aqi.exceeds_alert_level);
        assert!(operator_view(&snap, now(), 80, 100).aqi.exceeds_alert_level);
    }

    #[test]
    fn operator_alert_ages() {
        let snap = snapshot();
        let view = operator_view(&snap, now(), 80, AQI_ALERT_LEVEL);
        assert_eq!(view.alerts[0].age, "15m ago");
        assert_eq!(view.alerts[4].age, "1h ago");
        assert!(view.alerts[1].highlighted);
    }

    #[test]
    fn response_rows_carry_labels() {
        let snap = snapshot();
        let view = operator_view(&snap, now(), 80, AQI_ALERT_LEVEL);
        let ev1 = &view.responses[0];
        assert_eq!(ev1.call_sign, "PUNE-108-A");
        assert_eq!(ev1.status_label, "En Route");
        assert_eq!(ev1.eta, "6 min");
        assert!(ev1.green_corridor);

        let ev2 = &view.responses[1];
        assert_eq!(ev2.status, VehicleStatus::Responding);
        assert!(!ev2.green_corridor);
    }

    #[test]
    fn prediction_rising_flags() {
        let snap = snapshot();
        let trend = prediction_trend(&snap.predictions);
        let rising: Vec<bool> = trend.iter().map(|p| p.rising).collect();
        assert_eq!(rising, [false, true, false, false]);
        assert!(prediction_trend(&[]).is_empty());
    }

    #[test]
    fn empty_selection_resolves_to_none() {
        let snap = snapshot();
        let sel = Selection::default();
        assert!(selected_vehicle(&snap.fleet, &sel).unwrap().is_none());
        assert!(selected_junction(&snap.junctions, &sel).unwrap().is_none());
    }

    #[test]
    fn live_selection_resolves() {
        let snap = snapshot();
        let v = selected_vehicle(&snap.fleet, &Selection::vehicle("ev4"))
            .unwrap()
            .unwrap();
        assert_eq!(v.eta_label(), "Arrived");
        let j = selected_junction(&snap.junctions, &Selection::junction("j18"))
            .unwrap()
            .unwrap();
        assert_eq!(j.name, "Viman Nagar Chowk");
    }

    #[test]
    fn stale_selection_is_not_found() {
        let snap = snapshot();
        let err = selected_vehicle(&snap.fleet, &Selection::vehicle("ev42")).unwrap_err();
        assert_eq!(err, FeedError::not_found("vehicle", "ev42"));
    }

    #[test]
    fn public_view_serializes_without_sensitive_types() {
        let snap = snapshot();
        let json = serde_json::to_string(&public_view(&snap, 5, now())).unwrap();
        assert!(!json.contains("stolen_vehicle"));
        assert!(!json.contains("rash_driving"));
        assert!(!json.contains(r#""type":"emergency""#));
        assert!(json.contains(r#""label":"Unhealthy""#));
    }
}
