//! Catalog loading and boundary validation.
//!
//! External data enters the model only through [`Catalog`]. Records that
//! violate a schema invariant are rejected here so the stores can assume
//! well-formed data.

use std::collections::HashSet;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use gs_feed_model::{
    Alert, AqiReading, CityEvent, EmergencyVehicle, FeedError, FeedResult, HourlyVolume, Junction,
    MAX_CONGESTION, TrafficPrediction, TrafficStats, VehicleStatus, WeeklyTrend, ZoneShare,
};

use crate::alerts::AlertStore;
use crate::fleet::EmergencyFleetStore;
use crate::junctions::JunctionStatusStore;
use crate::snapshot::FeedSnapshot;

/// Everything the dashboard shows, as loaded at process start.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub junctions: Vec<Junction>,
    #[serde(default)]
    pub alerts: Vec<Alert>,
    #[serde(default)]
    pub emergency_vehicles: Vec<EmergencyVehicle>,
    pub aqi: AqiReading,
    #[serde(default)]
    pub stats: TrafficStats,
    #[serde(default)]
    pub predictions: Vec<TrafficPrediction>,
    #[serde(default)]
    pub hourly_traffic: Vec<HourlyVolume>,
    #[serde(default)]
    pub weekly_trends: Vec<WeeklyTrend>,
    #[serde(default)]
    pub congestion_by_zone: Vec<ZoneShare>,
    #[serde(default)]
    pub events: Vec<CityEvent>,
}

impl Catalog {
    /// The built-in Pune catalog, with alert ages measured back from `now`.
    pub fn pune(now: DateTime<Utc>) -> Self {
        crate::pune::catalog(now)
    }

    /// Parse and validate a JSON catalog.
    pub fn from_json_str(json: &str) -> FeedResult<Self> {
        let catalog: Self =
            serde_json::from_str(json).map_err(|e| FeedError::Parse(e.to_string()))?;
        catalog.validate()?;
        tracing::debug!(
            junctions = catalog.junctions.len(),
            alerts = catalog.alerts.len(),
            vehicles = catalog.emergency_vehicles.len(),
            "catalog parsed"
        );
        Ok(catalog)
    }

    /// Read, parse and validate a JSON catalog file.
    pub fn from_file(path: impl AsRef<Path>) -> FeedResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| FeedError::Io(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&contents)
    }

    /// Check every schema invariant the type system does not already enforce.
    pub fn validate(&self) -> FeedResult<()> {
        unique_ids("junction", self.junctions.iter().map(|j| j.id.as_str()))?;
        unique_ids("alert", self.alerts.iter().map(|a| a.id.as_str()))?;
        unique_ids(
            "vehicle",
            self.emergency_vehicles.iter().map(|v| v.id.as_str()),
        )?;
        unique_ids("event", self.events.iter().map(|e| e.id.as_str()))?;

        for j in &self.junctions {
            if j.congestion_level > MAX_CONGESTION {
                return Err(FeedError::invalid(
                    "junction",
                    &j.id,
                    format!("congestion {} exceeds {MAX_CONGESTION}", j.congestion_level),
                ));
            }
            if !non_negative(j.avg_speed) {
                return Err(FeedError::invalid(
                    "junction",
                    &j.id,
                    format!("average speed {} is negative", j.avg_speed),
                ));
            }
        }

        for v in &self.emergency_vehicles {
            if v.priority == 0 {
                return Err(FeedError::invalid("vehicle", &v.id, "priority must be >= 1"));
            }
            if v.status == VehicleStatus::OnScene && v.eta > 0 {
                tracing::warn!(
                    vehicle_id = %v.id,
                    eta = v.eta,
                    "on-scene vehicle reports a non-zero ETA"
                );
            }
            if v.status.is_active_response() && v.eta == 0 {
                tracing::warn!(
                    vehicle_id = %v.id,
                    status = %v.status,
                    "responding vehicle reports a zero ETA"
                );
            }
        }

        for (name, value) in [
            ("pm25", self.aqi.pm25),
            ("pm10", self.aqi.pm10),
            ("no2", self.aqi.no2),
            ("o3", self.aqi.o3),
            ("co", self.aqi.co),
        ] {
            if !non_negative(value) {
                return Err(FeedError::invalid(
                    "aqi",
                    name,
                    format!("concentration {value} is negative"),
                ));
            }
        }

        if !non_negative(self.stats.avg_speed) {
            return Err(FeedError::invalid(
                "stats",
                "avg_speed",
                format!("average speed {} is negative", self.stats.avg_speed),
            ));
        }

        for h in &self.hourly_traffic {
            if !non_negative(h.avg_speed) {
                return Err(FeedError::invalid(
                    "hourly_traffic",
                    &h.hour,
                    format!("average speed {} is negative", h.avg_speed),
                ));
            }
        }

        for w in &self.weekly_trends {
            if w.congestion > MAX_CONGESTION {
                return Err(FeedError::invalid(
                    "weekly_trend",
                    &w.day,
                    format!("congestion {} exceeds {MAX_CONGESTION}", w.congestion),
                ));
            }
        }

        for z in &self.congestion_by_zone {
            if z.value > MAX_CONGESTION {
                return Err(FeedError::invalid(
                    "zone",
                    &z.name,
                    format!("share {} exceeds 100", z.value),
                ));
            }
        }

        for p in &self.predictions {
            if p.congestion_level > MAX_CONGESTION || p.confidence > 100 {
                return Err(FeedError::invalid(
                    "prediction",
                    &p.time,
                    "percentages must be within 0-100",
                ));
            }
        }

        Ok(())
    }

    /// Freeze the catalog into stores.
    pub fn snapshot(self, captured_at: DateTime<Utc>) -> FeedSnapshot {
        FeedSnapshot {
            junctions: JunctionStatusStore::new(self.junctions),
            alerts: AlertStore::new(self.alerts),
            fleet: EmergencyFleetStore::new(self.emergency_vehicles),
            aqi: self.aqi,
            stats: self.stats,
            predictions: self.predictions,
            hourly_traffic: self.hourly_traffic,
            weekly_trends: self.weekly_trends,
            congestion_by_zone: self.congestion_by_zone,
            events: self.events,
            captured_at,
        }
    }
}

fn non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

fn unique_ids<'a>(kind: &'static str, ids: impl Iterator<Item = &'a str>) -> FeedResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(FeedError::invalid(kind, id, "duplicate id"));
        }
    }
    Ok(())
}
