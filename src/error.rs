use std::fmt;

use crate::vehicle::VehicleKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParkingError {
    /// No free spot of the requested kind anywhere in the facility.
    FacilityFull(VehicleKind),
    /// Ticket id is not in the active set: never issued, or already consumed.
    /// The two cases are deliberately indistinguishable.
    TicketNotFound(String),
    /// An active ticket references a level or spot that does not exist.
    /// Structural inconsistency; the ticket stays active so nothing is lost.
    SpotNotFound { level_id: u32, spot_id: String },
    /// A spot was occupied while occupied, or released while free.
    InvalidState(&'static str),
    /// Exit time precedes the ticket's issue time.
    InvalidTimeRange,
    LockPoisoned(&'static str),
}

impl fmt::Display for ParkingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParkingError::FacilityFull(kind) => {
                write!(f, "no free {:?} spot in the facility", kind)
            }
            ParkingError::TicketNotFound(id) => {
                write!(f, "ticket {} is not active", id)
            }
            ParkingError::SpotNotFound { level_id, spot_id } => {
                write!(f, "spot {} not found on level {}", spot_id, level_id)
            }
            ParkingError::InvalidState(operation) => {
                write!(f, "invalid spot state during {}", operation)
            }
            ParkingError::InvalidTimeRange => {
                write!(f, "exit time precedes issue time")
            }
            ParkingError::LockPoisoned(operation) => {
                write!(f, "facility lock poisoned during {}", operation)
            }
        }
    }
}

impl std::error::Error for ParkingError {}
