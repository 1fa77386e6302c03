use serde::{Deserialize, Serialize};

/// Expected effect of a planned event on surrounding traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrafficImpact {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Upcoming,
    Completed,
}

/// A planned gathering that affects traffic (festival, marathon, summit).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityEvent {
    pub id: String,
    pub name: String,
    /// Free-form kind, e.g. "Sports", "Festival".
    pub kind: String,
    /// Display date, e.g. "Sep 17, 2026".
    pub date: String,
    /// Display time window, e.g. "12:00 - 23:00".
    pub time: String,
    pub location: String,
    pub expected_crowds: u32,
    pub traffic_impact: TrafficImpact,
    pub status: EventStatus,
}
