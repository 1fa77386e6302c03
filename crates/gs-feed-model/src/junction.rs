use serde::{Deserialize, Serialize};

use crate::error::FeedError;
use crate::geo::Coordinate;

/// Current signal phase at a junction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalPhase {
    Green,
    Yellow,
    Red,
}

impl SignalPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Red => "red",
        }
    }
}

impl std::fmt::Display for SignalPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SignalPhase {
    type Err = FeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "green" => Ok(Self::Green),
            "yellow" => Ok(Self::Yellow),
            "red" => Ok(Self::Red),
            other => Err(FeedError::UnrecognizedValue {
                kind: "signal phase",
                value: other.to_string(),
            }),
        }
    }
}

/// Highest valid congestion percentage.
pub const MAX_CONGESTION: u8 = 100;

/// A monitored road intersection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Junction {
    /// Stable catalog id (e.g., "j1"), never reused.
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub position: Coordinate,
    /// Current signal phase.
    pub status: SignalPhase,
    /// Congestion percentage, 0–100.
    pub congestion_level: u8,
    /// Average speed through the junction in km/h.
    pub avg_speed: f64,
    pub vehicle_count: u32,
    /// Average wait in seconds.
    pub wait_time: u32,
}

impl Junction {
    pub fn congestion_band(&self) -> CongestionBand {
        CongestionBand::of(self.congestion_level)
    }
}

/// Coarse congestion bucket used for junction badges and bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CongestionBand {
    /// Below 40%.
    Low,
    /// 40% up to 69%.
    Moderate,
    /// 70% and above.
    High,
}

impl CongestionBand {
    pub fn of(level: u8) -> Self {
        match level {
            0..=39 => Self::Low,
            40..=69 => Self::Moderate,
            _ => Self::High,
        }
    }
}
