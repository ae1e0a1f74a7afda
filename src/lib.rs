mod error;
mod facility;
mod level;
mod shared;
mod spot;
mod ticket;
mod vehicle;

pub use error::ParkingError;
pub use facility::{Facility, FacilityBuilder, FacilitySnapshot, LevelSnapshot};
pub use level::Level;
pub use shared::SharedFacility;
pub use spot::Spot;
pub use ticket::Ticket;
pub use vehicle::{Vehicle, VehicleKind};
