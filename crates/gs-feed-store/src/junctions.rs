//! Monitored junctions and their congestion projections.

use std::cmp::Reverse;

use gs_feed_model::{FeedError, FeedResult, Junction, SignalPhase};

/// The ordered junction catalog.
#[derive(Debug, Clone, Default)]
pub struct JunctionStatusStore {
    junctions: Vec<Junction>,
}

impl JunctionStatusStore {
    pub fn new(junctions: Vec<Junction>) -> Self {
        Self { junctions }
    }

    /// Every junction in catalog order.
    pub fn all(&self) -> &[Junction] {
        &self.junctions
    }

    pub fn len(&self) -> usize {
        self.junctions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.junctions.is_empty()
    }

    /// The `n` most congested junctions, highest first. Equal levels keep
    /// catalog order.
    pub fn top_congested(&self, n: usize) -> Vec<&Junction> {
        let mut ranked: Vec<&Junction> = self.junctions.iter().collect();
        // sort_by_key is stable
        ranked.sort_by_key(|j| Reverse(j.congestion_level));
        ranked.truncate(n);
        ranked
    }

    /// Junctions whose congestion is strictly above `pct`, in catalog order.
    pub fn above_threshold(&self, pct: u8) -> Vec<&Junction> {
        self.junctions
            .iter()
            .filter(|j| j.congestion_level > pct)
            .collect()
    }

    pub fn count_by_phase(&self, phase: SignalPhase) -> usize {
        self.junctions.iter().filter(|j| j.status == phase).count()
    }

    pub fn by_id(&self, id: &str) -> FeedResult<&Junction> {
        self.junctions.iter().find(|j| j.id == id).ok_or_else(|| {
            tracing::debug!(junction_id = %id, "junction lookup missed");
            FeedError::not_found("junction", id)
        })
    }
}
