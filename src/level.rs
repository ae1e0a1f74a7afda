use serde::{Deserialize, Serialize};

use crate::spot::Spot;
use crate::vehicle::VehicleKind;

/// An ordered shelf of spots. Vec order is allocation priority: the first
/// free spot of a matching kind wins, every time.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Level {
    id: u32,
    spots: Vec<Spot>,
}

impl Level {
    pub fn new(id: u32, spots: Vec<Spot>) -> Self {
        Level { id, spots }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn spots(&self) -> &[Spot] {
        &self.spots
    }

    /// First-fit scan in stored order. Deterministic given occupancy; part of
    /// the level's contract, not an implementation detail.
    pub fn find_free_spot(&mut self, kind: VehicleKind) -> Option<&mut Spot> {
        self.spots
            .iter_mut()
            .find(|spot| spot.is_free() && spot.kind() == kind)
    }

    pub fn spot_mut(&mut self, spot_id: &str) -> Option<&mut Spot> {
        self.spots.iter_mut().find(|spot| spot.id() == spot_id)
    }

    pub fn free_count(&self) -> usize {
        self.spots.iter().filter(|spot| spot.is_free()).count()
    }

    pub fn occupied_count(&self) -> usize {
        self.spots.len() - self.free_count()
    }
}
