use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::FeedError;

/// What kind of event an alert reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertCategory {
    Accident,
    Congestion,
    /// Air quality threshold breach.
    #[serde(rename = "aqi")]
    AirQuality,
    Emergency,
    Event,
    RashDriving,
    StolenVehicle,
}

impl AlertCategory {
    /// Categories safe to show on the public view. Emergency, rash-driving
    /// and stolen-vehicle alerts stay operator-only.
    pub const PUBLIC: [AlertCategory; 3] = [Self::Accident, Self::Congestion, Self::Event];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accident => "accident",
            Self::Congestion => "congestion",
            Self::AirQuality => "aqi",
            Self::Emergency => "emergency",
            Self::Event => "event",
            Self::RashDriving => "rash_driving",
            Self::StolenVehicle => "stolen_vehicle",
        }
    }

    pub fn is_public(&self) -> bool {
        Self::PUBLIC.contains(self)
    }
}

impl std::fmt::Display for AlertCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AlertCategory {
    type Err = FeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "accident" => Ok(Self::Accident),
            "congestion" => Ok(Self::Congestion),
            "aqi" => Ok(Self::AirQuality),
            "emergency" => Ok(Self::Emergency),
            "event" => Ok(Self::Event),
            "rash_driving" => Ok(Self::RashDriving),
            "stolen_vehicle" => Ok(Self::StolenVehicle),
            other => Err(FeedError::UnrecognizedValue {
                kind: "alert category",
                value: other.to_string(),
            }),
        }
    }
}

/// Alert severity, ordered from least to most severe.
///
/// Variant declaration order matters: `#[derive(Ord)]` uses it,
/// so Low < Medium < High < Critical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    /// High and critical alerts get the emphasized treatment.
    pub fn is_highlighted(&self) -> bool {
        *self >= Self::High
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Severity {
    type Err = FeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "critical" => Ok(Self::Critical),
            other => Err(FeedError::UnrecognizedValue {
                kind: "severity",
                value: other.to_string(),
            }),
        }
    }
}

/// A notable event requiring operator or public attention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    #[serde(rename = "type")]
    pub category: AlertCategory,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    /// Free-text location (e.g., "Swargate Bus Terminus").
    pub location: String,
    /// When the alert was raised.
    pub timestamp: DateTime<Utc>,
    /// Cleared once the incident is resolved.
    pub is_active: bool,
}
