use chrono::{DateTime, Utc};

use gs_feed_model::{
    AqiReading, CityEvent, HourlyVolume, TrafficPrediction, TrafficStats, WeeklyTrend, ZoneShare,
};

use crate::alerts::AlertStore;
use crate::fleet::EmergencyFleetStore;
use crate::junctions::JunctionStatusStore;

/// A complete, immutable copy of every store at one capture time.
///
/// Built once from a validated [`Catalog`](crate::Catalog); readers only
/// ever see whole snapshots.
#[derive(Debug, Clone)]
pub struct FeedSnapshot {
    pub junctions: JunctionStatusStore,
    pub alerts: AlertStore,
    pub fleet: EmergencyFleetStore,
    pub aqi: AqiReading,
    pub stats: TrafficStats,
    pub predictions: Vec<TrafficPrediction>,
    pub hourly_traffic: Vec<HourlyVolume>,
    pub weekly_trends: Vec<WeeklyTrend>,
    pub congestion_by_zone: Vec<ZoneShare>,
    pub events: Vec<CityEvent>,
    pub captured_at: DateTime<Utc>,
}
