//! Air quality readings and the fixed-threshold status buckets.
//!
//! The status bucket is never stored. [`AqiReading::status`] derives it from
//! the composite index on every call, and incoming JSON carrying its own
//! `status` key has that key ignored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::FeedError;

/// Air quality bucket derived from the composite index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AqiStatus {
    Good,
    Moderate,
    Unhealthy,
    Hazardous,
}

/// Placeholder shown for a status value this build does not recognize.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Default index above which the pollution view raises its warning badge.
pub const AQI_ALERT_LEVEL: u32 = 150;

/// Map a composite index to its bucket: ≤50 good, ≤100 moderate,
/// ≤200 unhealthy, otherwise hazardous.
pub fn classify(index: u32) -> AqiStatus {
    match index {
        0..=50 => AqiStatus::Good,
        51..=100 => AqiStatus::Moderate,
        101..=200 => AqiStatus::Unhealthy,
        _ => AqiStatus::Hazardous,
    }
}

/// Display label for a raw status string from an external feed.
///
/// Falls back to [`UNKNOWN_LABEL`] for values outside the enumeration.
pub fn label_for(raw: &str) -> &'static str {
    match raw.parse::<AqiStatus>() {
        Ok(status) => status.label(),
        Err(e) => {
            tracing::warn!(error = %e, "falling back to placeholder AQI label");
            UNKNOWN_LABEL
        }
    }
}

impl AqiStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Moderate => "moderate",
            Self::Unhealthy => "unhealthy",
            Self::Hazardous => "hazardous",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::Unhealthy => "Unhealthy",
            Self::Hazardous => "Hazardous",
        }
    }
}

impl std::fmt::Display for AqiStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AqiStatus {
    type Err = FeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "good" => Ok(Self::Good),
            "moderate" => Ok(Self::Moderate),
            "unhealthy" => Ok(Self::Unhealthy),
            "hazardous" => Ok(Self::Hazardous),
            other => Err(FeedError::UnrecognizedValue {
                kind: "AQI status",
                value: other.to_string(),
            }),
        }
    }
}

/// A single air quality snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AqiReading {
    /// Composite AQI.
    pub current: u32,
    /// PM2.5 in µg/m³.
    pub pm25: f64,
    /// PM10 in µg/m³.
    pub pm10: f64,
    /// NO₂ in ppb.
    pub no2: f64,
    /// O₃ in ppb.
    pub o3: f64,
    /// CO in ppm.
    pub co: f64,
    pub last_updated: DateTime<Utc>,
}

impl AqiReading {
    pub fn status(&self) -> AqiStatus {
        classify(self.current)
    }

    pub fn label(&self) -> &'static str {
        self.status().label()
    }

    pub fn exceeds_alert_level(&self) -> bool {
        self.exceeds(AQI_ALERT_LEVEL)
    }

    /// True when the index is strictly above an operator-chosen `level`.
    pub fn exceeds(&self, level: u32) -> bool {
        self.current > level
    }

    /// Component readings in display order.
    pub fn pollutants(&self) -> [PollutantReading; 5] {
        [
            PollutantReading::new(Pollutant::Pm25, self.pm25),
            PollutantReading::new(Pollutant::Pm10, self.pm10),
            PollutantReading::new(Pollutant::No2, self.no2),
            PollutantReading::new(Pollutant::O3, self.o3),
            PollutantReading::new(Pollutant::Co, self.co),
        ]
    }
}

/// Individual pollutant tracked alongside the composite index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pollutant {
    Pm25,
    Pm10,
    No2,
    O3,
    Co,
}

impl Pollutant {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pm25 => "PM2.5",
            Self::Pm10 => "PM10",
            Self::No2 => "NO₂",
            Self::O3 => "O₃",
            Self::Co => "CO",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Self::Pm25 | Self::Pm10 => "µg/m³",
            Self::No2 | Self::O3 => "ppb",
            Self::Co => "ppm",
        }
    }

    /// Full-scale value of the gauge for this pollutant.
    pub fn gauge_max(&self) -> f64 {
        match self {
            Self::Pm25 | Self::No2 | Self::O3 => 100.0,
            Self::Pm10 => 150.0,
            Self::Co => 5.0,
        }
    }

    /// Concentration above which the reading is flagged. Only particulates
    /// carry a threshold.
    pub fn elevated_above(&self) -> Option<f64> {
        match self {
            Self::Pm25 => Some(50.0),
            Self::Pm10 => Some(100.0),
            Self::No2 | Self::O3 | Self::Co => None,
        }
    }
}

/// One pollutant value with its display metadata.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PollutantReading {
    pub pollutant: Pollutant,
    pub label: &'static str,
    pub value: f64,
    pub unit: &'static str,
    pub gauge_max: f64,
    pub elevated: bool,
}

impl PollutantReading {
    pub fn new(pollutant: Pollutant, value: f64) -> Self {
        Self {
            pollutant,
            label: pollutant.label(),
            value,
            unit: pollutant.unit(),
            gauge_max: pollutant.gauge_max(),
            elevated: pollutant.elevated_above().is_some_and(|limit| value > limit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pune_reading() -> AqiReading {
        AqiReading {
            current: 118,
            pm25: 48.0,
            pm10: 86.0,
            no2: 38.0,
            o3: 28.0,
            co: 1.4,
            last_updated: Utc::now(),
        }
    }

    #[test]
    fn classify_thresholds() {
        assert_eq!(classify(0), AqiStatus::Good);
        assert_eq!(classify(50), AqiStatus::Good);
        assert_eq!(classify(51), AqiStatus::Moderate);
        assert_eq!(classify(100), AqiStatus::Moderate);
        assert_eq!(classify(101), AqiStatus::Unhealthy);
        assert_eq!(classify(200), AqiStatus::Unhealthy);
        assert_eq!(classify(201), AqiStatus::Hazardous);
        assert_eq!(classify(u32::MAX), AqiStatus::Hazardous);
    }

    #[test]
    fn classify_is_idempotent() {
        for index in [0, 42, 118, 175, 350] {
            assert_eq!(classify(index), classify(index));
        }
    }

    #[test]
    fn dashboard_example_label() {
        // 118 falls in (100, 200].
        assert_eq!(classify(118), AqiStatus::Unhealthy);
        assert_eq!(classify(118).label(), "Unhealthy");
        assert_eq!(label_for("moderate"), "Moderate");
    }

    #[test]
    fn unknown_status_falls_back() {
        assert_eq!(label_for("smoggy"), UNKNOWN_LABEL);
        assert_eq!(label_for(""), "Unknown");
        assert_eq!(label_for("hazardous"), "Hazardous");
    }

    #[test]
    fn status_derived_not_stored() {
        let json = r#"{
            "current": 42,
            "pm25": 10.0,
            "pm10": 20.0,
            "no2": 5.0,
            "o3": 8.0,
            "co": 0.3,
            "status": "hazardous",
            "last_updated": "2026-09-17T10:00:00Z"
        }"#;
        let reading: AqiReading = serde_json::from_str(json).unwrap();
        assert_eq!(reading.status(), AqiStatus::Good);

        let out = serde_json::to_value(&reading).unwrap();
        assert!(out.get("status").is_none());
    }

    #[test]
    fn alert_level_badge() {
        let mut reading = pune_reading();
        assert!(!reading.exceeds_alert_level());
        reading.current = 151;
        assert!(reading.exceeds_alert_level());
    }

    #[test]
    fn custom_alert_level() {
        let reading = pune_reading();
        assert!(reading.exceeds(100));
        assert!(!reading.exceeds(118));
    }

    #[test]
    fn pollutant_flags() {
        let mut reading = pune_reading();
        let [pm25, pm10, no2, _, co] = reading.pollutants();
        assert!(!pm25.elevated);
        assert!(!pm10.elevated);
        assert_eq!(pm10.gauge_max, 150.0);
        assert_eq!(no2.unit, "ppb");
        assert_eq!(co.label, "CO");

        reading.pm25 = 51.0;
        reading.no2 = 400.0;
        let [pm25, _, no2, _, _] = reading.pollutants();
        assert!(pm25.elevated);
        assert!(!no2.elevated);
    }
}
