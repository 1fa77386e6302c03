//! Emergency vehicles currently known to dispatch.

use gs_feed_model::{EmergencyVehicle, FeedError, FeedResult};

#[derive(Debug, Clone, Default)]
pub struct EmergencyFleetStore {
    vehicles: Vec<EmergencyVehicle>,
}

impl EmergencyFleetStore {
    pub fn new(vehicles: Vec<EmergencyVehicle>) -> Self {
        Self { vehicles }
    }

    pub fn all(&self) -> &[EmergencyVehicle] {
        &self.vehicles
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// Vehicles responding or en route, in catalog order. On-scene and
    /// returning units are excluded.
    pub fn active_responses(&self) -> Vec<&EmergencyVehicle> {
        self.vehicles
            .iter()
            .filter(|v| v.status.is_active_response())
            .collect()
    }

    /// Look up a vehicle. A stale id is an error, never a placeholder.
    pub fn by_id(&self, id: &str) -> FeedResult<&EmergencyVehicle> {
        self.vehicles.iter().find(|v| v.id == id).ok_or_else(|| {
            tracing::debug!(vehicle_id = %id, "vehicle lookup missed");
            FeedError::not_found("vehicle", id)
        })
    }
}
