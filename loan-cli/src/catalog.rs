//! Stubbed vehicle inventory.
//!
//! Stands in for the catalog service a real deployment would query;
//! the core only ever sees the ids.

use loan_core::models::{Vehicle, VehicleId};
use rust_decimal::Decimal;

pub fn sample_inventory() -> Vec<Vehicle> {
    let vehicle = |id: u32, make: &str, model: &str, price: i64| Vehicle {
        id: VehicleId(id),
        make: make.to_string(),
        model: model.to_string(),
        year: 2023,
        price: Decimal::from(price),
    };

    vec![
        vehicle(1, "Honda", "Civic", 23950),
        vehicle(2, "Toyota", "Camry", 25945),
        vehicle(3, "Ford", "F-150", 32990),
        vehicle(4, "Chevrolet", "Equinox", 26995),
        vehicle(5, "Nissan", "Rogue", 27260),
        vehicle(6, "Hyundai", "Tucson", 25350),
    ]
}
