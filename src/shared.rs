use std::sync::{Arc, Mutex};

use crate::error::ParkingError;
use crate::facility::{Facility, FacilitySnapshot};
use crate::ticket::Ticket;
use crate::vehicle::Vehicle;

/// Cloneable thread-safe handle to a facility.
///
/// Each operation takes the lock for its full scan-then-mutate sequence, so
/// two concurrent parks can never claim the same spot and a park/exit race
/// can never leave the ticket index and spot occupancy disagreeing. A
/// poisoned lock surfaces as `LockPoisoned` rather than a panic.
#[derive(Clone)]
pub struct SharedFacility {
    inner: Arc<Mutex<Facility>>,
}

impl SharedFacility {
    pub fn new(facility: Facility) -> Self {
        SharedFacility {
            inner: Arc::new(Mutex::new(facility)),
        }
    }

    pub fn park(&self, vehicle: Vehicle) -> Result<Ticket, ParkingError> {
        self.inner
            .lock()
            .map_err(|_| ParkingError::LockPoisoned("park"))?
            .park(vehicle)
    }

    pub fn exit(&self, ticket_id: &str) -> Result<u64, ParkingError> {
        self.inner
            .lock()
            .map_err(|_| ParkingError::LockPoisoned("exit"))?
            .exit(ticket_id)
    }

    pub fn snapshot(&self) -> Result<FacilitySnapshot, ParkingError> {
        Ok(self
            .inner
            .lock()
            .map_err(|_| ParkingError::LockPoisoned("snapshot"))?
            .snapshot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spot::Spot;
    use crate::vehicle::VehicleKind;

    #[test]
    fn clones_share_one_facility() {
        let shared = SharedFacility::new(
            Facility::builder()
                .level(0, vec![Spot::new("S00", VehicleKind::Car)])
                .build(),
        );
        let other = shared.clone();

        let ticket = shared.park(Vehicle::new("X-1", VehicleKind::Car)).unwrap();
        assert_eq!(
            other.park(Vehicle::new("X-2", VehicleKind::Car)).unwrap_err(),
            ParkingError::FacilityFull(VehicleKind::Car)
        );

        assert_eq!(other.exit(ticket.id()).unwrap(), 20);
        assert_eq!(shared.snapshot().unwrap().active_tickets, 0);
    }
}
