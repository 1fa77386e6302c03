use serde::{Deserialize, Serialize};

use crate::error::FeedError;
use crate::geo::Coordinate;

/// Emergency vehicle class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleClass {
    Ambulance,
    Fire,
    Police,
}

/// Dispatch lifecycle: responding → en_route → on_scene → returning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleStatus {
    Responding,
    EnRoute,
    OnScene,
    Returning,
}

impl VehicleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Responding => "responding",
            Self::EnRoute => "en_route",
            Self::OnScene => "on_scene",
            Self::Returning => "returning",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Responding => "Responding",
            Self::EnRoute => "En Route",
            Self::OnScene => "On Scene",
            Self::Returning => "Returning",
        }
    }

    /// Moving toward an incident.
    pub fn is_active_response(&self) -> bool {
        matches!(self, Self::Responding | Self::EnRoute)
    }
}

impl std::fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for VehicleStatus {
    type Err = FeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "responding" => Ok(Self::Responding),
            "en_route" => Ok(Self::EnRoute),
            "on_scene" => Ok(Self::OnScene),
            "returning" => Ok(Self::Returning),
            other => Err(FeedError::UnrecognizedValue {
                kind: "vehicle status",
                value: other.to_string(),
            }),
        }
    }
}

/// A unit responding to a dispatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmergencyVehicle {
    pub id: String,
    #[serde(rename = "type")]
    pub class: VehicleClass,
    /// Radio call sign (e.g., "PUNE-108-A").
    pub call_sign: String,
    pub current_location: Coordinate,
    pub destination: Coordinate,
    pub status: VehicleStatus,
    /// Minutes to arrival; 0 once arrived. Supplied by dispatch, never recomputed here.
    pub eta: u32,
    /// 1 is the most urgent.
    pub priority: u32,
}

impl EmergencyVehicle {
    pub fn has_arrived(&self) -> bool {
        self.eta == 0
    }

    /// "6 min", or "Arrived" once the ETA reaches zero.
    pub fn eta_label(&self) -> String {
        if self.has_arrived() {
            "Arrived".to_string()
        } else {
            format!("{} min", self.eta)
        }
    }

    /// Signals along the route are held green while the unit is en route.
    pub fn green_corridor_active(&self) -> bool {
        self.status == VehicleStatus::EnRoute
    }
}
