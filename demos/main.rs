use parklot::{Facility, Spot, Vehicle, VehicleKind};

/// Walk through the sample lot: two levels, a car parks, pays, and leaves.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut level_0: Vec<Spot> = (0..5)
        .map(|i| Spot::new(format!("S0{}", i), VehicleKind::Car))
        .collect();
    level_0.extend((0..3).map(|i| Spot::new(format!("S0b{}", i), VehicleKind::Bike)));

    let mut level_1: Vec<Spot> = (0..5)
        .map(|i| Spot::new(format!("S1{}", i), VehicleKind::Car))
        .collect();
    level_1.extend((0..2).map(|i| Spot::new(format!("S1t{}", i), VehicleKind::Truck)));

    let mut lot = Facility::builder()
        .level(0, level_0)
        .level(1, level_1)
        .build();

    let ticket = lot.park(Vehicle::new("KA-01-HH-1234", VehicleKind::Car))?;
    println!(
        "Vehicle parked at level {} spot {}. Ticket ID: {}",
        ticket.level_id(),
        ticket.spot_id(),
        ticket.id()
    );
    println!(
        "Occupancy: {}",
        serde_json::to_string_pretty(&lot.snapshot())?
    );

    let fee = lot.exit(ticket.id())?;
    println!("Vehicle exited. Fee: {}", fee);

    match lot.exit(ticket.id()) {
        Err(e) => println!("Second exit rejected: {}", e),
        Ok(_) => unreachable!("a consumed ticket must not exit twice"),
    }

    Ok(())
}
