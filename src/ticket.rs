use std::time::SystemTime;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ParkingError;
use crate::vehicle::Vehicle;

const SECS_PER_HOUR: u64 = 3600;

/// A receipt minted on park and destroyed on exit. It does not own its spot;
/// it references it by the (level id, spot id) pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    id: String,
    vehicle: Vehicle,
    level_id: u32,
    spot_id: String,
    issued_at: SystemTime,
}

impl Ticket {
    /// Mint a ticket with a fresh collision-resistant id. The id is opaque to
    /// callers; uniqueness within one facility's lifetime is the only
    /// guarantee.
    pub(crate) fn issue(
        vehicle: Vehicle,
        level_id: u32,
        spot_id: String,
        issued_at: SystemTime,
    ) -> Self {
        Ticket {
            id: Uuid::new_v4().to_string(),
            vehicle,
            level_id,
            spot_id,
            issued_at,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    pub fn level_id(&self) -> u32 {
        self.level_id
    }

    pub fn spot_id(&self) -> &str {
        &self.spot_id
    }

    pub fn issued_at(&self) -> SystemTime {
        self.issued_at
    }

    /// Fee for leaving at `exit_time`, in currency units.
    ///
    /// Billable hours are `max(1, floor(duration / 1h))`: everything under
    /// two hours bills as one, and partial hours beyond that are free. That
    /// is a floor with a one-hour minimum, not a ceiling, and it is the
    /// billing rule this engine is contracted to keep.
    pub fn fee(&self, exit_time: SystemTime) -> Result<u64, ParkingError> {
        let duration = exit_time
            .duration_since(self.issued_at)
            .map_err(|_| ParkingError::InvalidTimeRange)?;
        let hours = (duration.as_secs() / SECS_PER_HOUR).max(1);
        Ok(hours * self.vehicle.kind.hourly_rate())
    }

    pub fn deserialize(data: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(data)
    }
}
