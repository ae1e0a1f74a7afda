use serde::{Deserialize, Serialize};

use crate::error::ParkingError;
use crate::vehicle::{Vehicle, VehicleKind};

/// A single physical slot. The kind is fixed at creation; occupancy is the
/// `occupant` field itself, so "occupied" and "has an occupant" cannot drift
/// apart.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spot {
    id: String,
    kind: VehicleKind,
    occupant: Option<Vehicle>,
}

impl Spot {
    pub fn new(id: impl Into<String>, kind: VehicleKind) -> Self {
        Spot {
            id: id.into(),
            kind,
            occupant: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> VehicleKind {
        self.kind
    }

    pub fn is_free(&self) -> bool {
        self.occupant.is_none()
    }

    pub fn occupant(&self) -> Option<&Vehicle> {
        self.occupant.as_ref()
    }

    /// Place a vehicle in the spot. The facility only calls this on spots it
    /// just found free; a double occupy is a caller bug and surfaces as
    /// `InvalidState` rather than a silent overwrite.
    pub fn occupy(&mut self, vehicle: Vehicle) -> Result<(), ParkingError> {
        if self.occupant.is_some() {
            return Err(ParkingError::InvalidState("occupy of an occupied spot"));
        }
        self.occupant = Some(vehicle);
        Ok(())
    }

    /// Clear the spot, handing back the departing vehicle. Releasing a free
    /// spot is likewise a caller bug.
    pub fn release(&mut self) -> Result<Vehicle, ParkingError> {
        self.occupant
            .take()
            .ok_or(ParkingError::InvalidState("release of a free spot"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn occupy_then_release() {
        let mut spot = Spot::new("S00", VehicleKind::Car);
        assert!(spot.is_free());

        spot.occupy(Vehicle::new("X-1", VehicleKind::Car)).unwrap();
        assert!(!spot.is_free());
        assert_eq!(spot.occupant().unwrap().plate, "X-1");

        let vehicle = spot.release().unwrap();
        assert_eq!(vehicle.plate, "X-1");
        assert!(spot.is_free());
    }

    #[test]
    fn double_occupy_is_invalid_state() {
        let mut spot = Spot::new("S00", VehicleKind::Car);
        spot.occupy(Vehicle::new("X-1", VehicleKind::Car)).unwrap();

        let err = spot
            .occupy(Vehicle::new("X-2", VehicleKind::Car))
            .unwrap_err();
        assert!(matches!(err, ParkingError::InvalidState(_)));
        // The original occupant is untouched.
        assert_eq!(spot.occupant().unwrap().plate, "X-1");
    }

    #[test]
    fn release_of_free_spot_is_invalid_state() {
        let mut spot = Spot::new("S00", VehicleKind::Bike);
        let err = spot.release().unwrap_err();
        assert!(matches!(err, ParkingError::InvalidState(_)));
    }
}
