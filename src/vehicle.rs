use serde::{Deserialize, Serialize};

/// The closed set of vehicle categories the facility knows how to park.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleKind {
    Bike,
    Car,
    Truck,
}

impl VehicleKind {
    /// Fixed rate table, in currency units per billable hour.
    ///
    /// Exhaustive on purpose: adding a kind without a rate is a compile
    /// error, not a runtime lookup failure.
    pub fn hourly_rate(&self) -> u64 {
        match self {
            VehicleKind::Bike => 10,
            VehicleKind::Car => 20,
            VehicleKind::Truck => 30,
        }
    }
}

/// A vehicle as presented at the gate. The plate is caller-supplied and not
/// validated for format or uniqueness.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub plate: String,
    pub kind: VehicleKind,
}

impl Vehicle {
    pub fn new(plate: impl Into<String>, kind: VehicleKind) -> Self {
        Vehicle {
            plate: plate.into(),
            kind,
        }
    }
}
