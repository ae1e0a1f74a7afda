use std::collections::HashMap;
use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use crate::error::ParkingError;
use crate::level::Level;
use crate::spot::Spot;
use crate::ticket::Ticket;
use crate::vehicle::Vehicle;

/// The top-level coordinator: owns every level and the index of active
/// tickets. `park` and `exit` are the only operations that mutate it.
///
/// A `Facility` is a plain value. Hosts that need to share one across
/// threads wrap it in a [`SharedFacility`](crate::SharedFacility).
#[derive(Debug)]
pub struct Facility {
    levels: Vec<Level>,
    active_tickets: HashMap<String, Ticket>,
}

impl Facility {
    pub fn new(levels: Vec<Level>) -> Self {
        Facility {
            levels,
            active_tickets: HashMap::new(),
        }
    }

    pub fn builder() -> FacilityBuilder {
        FacilityBuilder::new()
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn active_ticket(&self, ticket_id: &str) -> Option<&Ticket> {
        self.active_tickets.get(ticket_id)
    }

    pub fn active_count(&self) -> usize {
        self.active_tickets.len()
    }

    /// Park a vehicle, issuing a ticket stamped with the current time.
    pub fn park(&mut self, vehicle: Vehicle) -> Result<Ticket, ParkingError> {
        self.park_at(vehicle, SystemTime::now())
    }

    /// Clock-explicit variant of [`park`](Facility::park).
    ///
    /// First-fit over levels in stored order, then over each level's spots in
    /// stored order. On success exactly one spot flips to occupied; on
    /// `FacilityFull` nothing changes.
    pub fn park_at(
        &mut self,
        vehicle: Vehicle,
        issued_at: SystemTime,
    ) -> Result<Ticket, ParkingError> {
        let kind = vehicle.kind;
        for level in &mut self.levels {
            let level_id = level.id();
            if let Some(spot) = level.find_free_spot(kind) {
                let spot_id = spot.id().to_string();
                spot.occupy(vehicle.clone())?;
                let ticket = Ticket::issue(vehicle, level_id, spot_id, issued_at);
                self.active_tickets
                    .insert(ticket.id().to_string(), ticket.clone());
                return Ok(ticket);
            }
        }
        Err(ParkingError::FacilityFull(kind))
    }

    /// Exit against the current time, returning the fee in currency units.
    pub fn exit(&mut self, ticket_id: &str) -> Result<u64, ParkingError> {
        self.exit_at(ticket_id, SystemTime::now())
    }

    /// Clock-explicit variant of [`exit`](Facility::exit).
    ///
    /// All-or-nothing: on any error the spot stays occupied and the ticket
    /// stays active. In particular a ticket whose level/spot pair no longer
    /// resolves reports `SpotNotFound` without dropping the ticket, so the
    /// inconsistency stays visible instead of being papered over.
    pub fn exit_at(
        &mut self,
        ticket_id: &str,
        exit_time: SystemTime,
    ) -> Result<u64, ParkingError> {
        let ticket = self
            .active_tickets
            .get(ticket_id)
            .ok_or_else(|| ParkingError::TicketNotFound(ticket_id.to_string()))?;

        let fee = ticket.fee(exit_time)?;
        let level_id = ticket.level_id();
        let spot_id = ticket.spot_id().to_string();

        let spot = self
            .levels
            .iter_mut()
            .find(|level| level.id() == level_id)
            .and_then(|level| level.spot_mut(&spot_id))
            .ok_or(ParkingError::SpotNotFound { level_id, spot_id })?;

        spot.release()?;
        self.active_tickets.remove(ticket_id);
        Ok(fee)
    }

    /// Read-only occupancy summary, serializable for hosts that want to
    /// persist or display it.
    pub fn snapshot(&self) -> FacilitySnapshot {
        FacilitySnapshot {
            levels: self
                .levels
                .iter()
                .map(|level| LevelSnapshot {
                    level_id: level.id(),
                    free: level.free_count(),
                    occupied: level.occupied_count(),
                })
                .collect(),
            active_tickets: self.active_tickets.len(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacilitySnapshot {
    pub levels: Vec<LevelSnapshot>,
    pub active_tickets: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSnapshot {
    pub level_id: u32,
    pub free: usize,
    pub occupied: usize,
}

/// Chainable static construction. Levels keep the order they were added in,
/// which is also allocation priority.
pub struct FacilityBuilder {
    levels: Vec<Level>,
}

impl FacilityBuilder {
    pub fn new() -> Self {
        FacilityBuilder { levels: vec![] }
    }

    pub fn level(mut self, id: u32, spots: Vec<Spot>) -> Self {
        self.levels.push(Level::new(id, spots));
        self
    }

    pub fn build(self) -> Facility {
        Facility::new(self.levels)
    }
}

impl Default for FacilityBuilder {
    fn default() -> Self {
        Self::new()
    }
}
