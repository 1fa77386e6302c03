use serde::{Deserialize, Serialize};

/// City-wide headline figures for the dashboard cards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrafficStats {
    pub total_vehicles: u32,
    /// km/h.
    pub avg_speed: f64,
    pub total_accidents: u32,
    pub emergency_responses: u32,
    pub green_corridors_active: u32,
    /// Percent reduction versus the pre-deployment baseline.
    pub congestion_reduction: f64,
}

/// Forecast congestion at a future horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficPrediction {
    /// Horizon label (e.g., "15 mins", "1 hour").
    pub time: String,
    pub congestion_level: u8,
    /// Model confidence, percent.
    pub confidence: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyVolume {
    /// "08:00"
    pub hour: String,
    pub vehicles: u32,
    pub avg_speed: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyTrend {
    pub day: String,
    pub congestion: u8,
    pub accidents: u32,
}

/// Share of city congestion attributed to a zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneShare {
    pub name: String,
    pub value: u8,
}
