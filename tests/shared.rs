use std::collections::HashSet;
use std::thread;

use parklot::{Facility, ParkingError, SharedFacility, Spot, Vehicle, VehicleKind};

fn facility_with_car_spots(count: usize) -> Facility {
    let spots = (0..count)
        .map(|i| Spot::new(format!("S{:02}", i), VehicleKind::Car))
        .collect();
    Facility::builder().level(0, spots).build()
}

#[test]
fn concurrent_parks_never_double_claim() {
    const SPOTS: usize = 8;
    const DRIVERS: usize = 16;

    let shared = SharedFacility::new(facility_with_car_spots(SPOTS));

    let handles: Vec<_> = (0..DRIVERS)
        .map(|i| {
            let shared = shared.clone();
            thread::spawn(move || shared.park(Vehicle::new(format!("P-{}", i), VehicleKind::Car)))
        })
        .collect();

    let mut claimed = HashSet::new();
    let mut full = 0;
    for handle in handles {
        match handle.join().unwrap() {
            Ok(ticket) => {
                assert!(claimed.insert((ticket.level_id(), ticket.spot_id().to_string())));
            }
            Err(ParkingError::FacilityFull(kind)) => {
                assert_eq!(kind, VehicleKind::Car);
                full += 1;
            }
            Err(other) => panic!("unexpected error: {}", other),
        }
    }

    // Exactly the capacity was handed out, once each.
    assert_eq!(claimed.len(), SPOTS);
    assert_eq!(full, DRIVERS - SPOTS);
    assert_eq!(shared.snapshot().unwrap().active_tickets, SPOTS);
}

#[test]
fn concurrent_park_exit_churn_stays_consistent() {
    const SPOTS: usize = 4;

    let shared = SharedFacility::new(facility_with_car_spots(SPOTS));

    let handles: Vec<_> = (0..SPOTS)
        .map(|i| {
            let shared = shared.clone();
            thread::spawn(move || {
                for round in 0..25 {
                    let plate = format!("P-{}-{}", i, round);
                    let ticket = shared.park(Vehicle::new(plate, VehicleKind::Car)).unwrap();
                    let fee = shared.exit(ticket.id()).unwrap();
                    assert!(fee >= VehicleKind::Car.hourly_rate());

                    // Each id is consumed exactly once.
                    assert_eq!(
                        shared.exit(ticket.id()).unwrap_err(),
                        ParkingError::TicketNotFound(ticket.id().to_string())
                    );
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let snapshot = shared.snapshot().unwrap();
    assert_eq!(snapshot.active_tickets, 0);
    assert_eq!(snapshot.levels[0].free, SPOTS);
}
